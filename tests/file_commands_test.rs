use eafitos::commands::BUILTINS;
use eafitos::repl::run;
use eafitos::session::Session;
use eafitos::style::Style;
use std::fs;
use std::io::Cursor;
use std::path::Path;
use tempfile::TempDir;

fn drive(script: &str) -> String {
    let session = Session::new("t", Style::plain());
    let mut input = Cursor::new(script.as_bytes().to_vec());
    let mut out = Vec::new();
    run(&session, &BUILTINS, &mut input, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn path_in(dir: &TempDir, name: &str) -> String {
    dir.path().join(name).to_str().unwrap().to_string()
}

#[test]
fn leer_prints_file_contents() {
    let dir = TempDir::new().unwrap();
    let file = path_in(&dir, "notas.txt");
    fs::write(&file, "primera linea\nsegunda linea\n").unwrap();

    let out = drive(&format!("leer {}\n", file));
    assert!(out.contains("Contenido de"));
    assert!(out.contains("primera linea\nsegunda linea\n"));
}

#[test]
fn leer_reports_missing_file_and_usage() {
    let dir = TempDir::new().unwrap();
    let missing = path_in(&dir, "nada.txt");
    let out = drive(&format!("leer {}\nleer\n", missing));
    assert!(out.contains("[ERROR] No se pudo abrir"));
    assert!(out.contains("Uso: leer <nombre_archivo>"));
}

#[test]
fn crear_makes_an_empty_file() {
    let dir = TempDir::new().unwrap();
    let file = path_in(&dir, "nuevo.txt");

    let out = drive(&format!("crear {}\n", file));
    assert!(out.contains("creado correctamente"));
    assert_eq!(fs::read(&file).unwrap(), b"");
}

#[test]
fn crear_asks_before_overwriting() {
    let dir = TempDir::new().unwrap();
    let file = path_in(&dir, "existe.txt");
    fs::write(&file, "datos").unwrap();

    let out = drive(&format!("crear {}\nn\n", file));
    assert!(out.contains("ya existe"));
    assert!(out.contains("Operación cancelada"));
    assert_eq!(fs::read_to_string(&file).unwrap(), "datos");

    let out = drive(&format!("crear {}\ns\n", file));
    assert!(out.contains("creado correctamente"));
    assert_eq!(fs::read_to_string(&file).unwrap(), "");
}

#[test]
fn crear_cancels_when_input_ends_during_confirmation() {
    let dir = TempDir::new().unwrap();
    let file = path_in(&dir, "existe.txt");
    fs::write(&file, "datos").unwrap();

    let out = drive(&format!("crear {}\n", file));
    assert!(out.contains("No se pudo leer la respuesta"));
    assert_eq!(fs::read_to_string(&file).unwrap(), "datos");
}

#[test]
fn eliminar_only_deletes_after_yes() {
    let dir = TempDir::new().unwrap();
    let file = path_in(&dir, "viejo.txt");
    fs::write(&file, "x").unwrap();

    let out = drive(&format!("eliminar {}\nno\n", file));
    assert!(out.contains("no fue eliminado"));
    assert!(Path::new(&file).exists());

    let out = drive(&format!("eliminar {}\nS\n", file));
    assert!(out.contains("eliminado correctamente"));
    assert!(!Path::new(&file).exists());
}

#[test]
fn eliminar_rejects_missing_file() {
    let dir = TempDir::new().unwrap();
    let out = drive(&format!("eliminar {}\n", path_in(&dir, "fantasma.txt")));
    assert!(out.contains("[ERROR]"));
    assert!(out.contains("no existe"));
}

#[test]
fn buscar_prints_numbered_matches() {
    let dir = TempDir::new().unwrap();
    let file = path_in(&dir, "notas.txt");
    fs::write(&file, "hola mundo\nadios\nHola otra vez\ndi hola\n").unwrap();

    let out = drive(&format!("buscar hola {}\n", file));
    assert!(out.contains("1: hola mundo"));
    assert!(out.contains("4: di hola"));
    assert!(!out.contains("Hola otra vez"));
    assert!(out.contains("2 coincidencia(s)"));

    let out = drive(&format!("buscar zzz {}\n", file));
    assert!(out.contains("No se encontró 'zzz'"));
}

#[test]
fn buscar_needs_text_and_file() {
    let out = drive("buscar hola\n");
    assert!(out.contains("Uso: buscar <texto> <nombre_archivo>"));
}
