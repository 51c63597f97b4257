mod ayuda;
mod buscar;
mod calc;
mod crear;
mod eliminar;
mod leer;
mod limpiar;
mod listar;
mod prompt;
mod salir;
mod tiempo;

pub use ayuda::AyudaCommand;
pub use buscar::{find_matches, BuscarCommand};
pub use calc::{evaluate, CalcCommand, Operator};
pub use crear::CrearCommand;
pub use eliminar::EliminarCommand;
pub use leer::LeerCommand;
pub use limpiar::{LimpiarCommand, CLEAR_SCREEN};
pub use listar::ListarCommand;
pub use prompt::PromptCommand;
pub use salir::SalirCommand;
pub use tiempo::TiempoCommand;
