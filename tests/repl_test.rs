use eafitos::commands::BUILTINS;
use eafitos::repl::{run, Exit};
use eafitos::session::Session;
use eafitos::style::Style;
use std::io::Cursor;

fn drive(session: &Session, script: &str) -> (Exit, String) {
    let mut input = Cursor::new(script.as_bytes().to_vec());
    let mut out = Vec::new();
    let exit = run(session, &BUILTINS, &mut input, &mut out).unwrap();
    (exit, String::from_utf8(out).unwrap())
}

fn plain_session() -> Session {
    Session::new("EAFITos", Style::plain())
}

#[test]
fn end_of_input_stops_the_loop() {
    let (exit, out) = drive(&plain_session(), "");
    assert_eq!(exit, Exit::EndOfInput);
    assert_eq!(out, "EAFITos> \n");
}

#[test]
fn blank_lines_only_redraw_the_prompt() {
    let (exit, out) = drive(&plain_session(), "\n   \n\t\n");
    assert_eq!(exit, Exit::EndOfInput);
    assert_eq!(out.matches("EAFITos> ").count(), 4);
    assert!(!out.contains("desconocido"));
}

#[test]
fn salir_requests_status_zero_and_stops_reading() {
    let (exit, out) = drive(&plain_session(), "salir\ncalc 1 + 1\n");
    assert_eq!(exit, Exit::Requested(0));
    assert!(out.contains("¡Hasta pronto!"));
    assert!(!out.contains("Resultado"));
}

#[test]
fn unknown_command_does_not_stop_the_loop() {
    let (exit, out) = drive(&plain_session(), "ls -la\ncalc 2 x 4\n");
    assert_eq!(exit, Exit::EndOfInput);
    assert!(out.contains("Comando desconocido: ls"));
    assert!(out.contains("Resultado: 8.00"));
}

#[test]
fn new_prompt_shows_on_the_next_iteration() {
    let session = plain_session();
    let (_, out) = drive(&session, "prompt MiShell\n");
    assert_eq!(session.prompt(), "MiShell");

    let first = out.find("EAFITos> ").unwrap();
    let second = out.find("MiShell> ").unwrap();
    assert!(first < second);
}

#[test]
fn prompt_words_are_joined_and_truncated() {
    let session = plain_session();
    drive(&session, "prompt mi   shell\n");
    assert_eq!(session.prompt(), "mi shell");

    let long = "p".repeat(100);
    let (_, out) = drive(&session, &format!("prompt {}\n", long));
    assert_eq!(session.prompt(), "p".repeat(63));
    assert!(out.contains(&format!("'{}'", "p".repeat(63))));
}

#[test]
fn prompt_without_text_shows_usage_and_current_value() {
    let (_, out) = drive(&plain_session(), "prompt\n");
    assert!(out.contains("Uso: prompt <nuevo_texto>"));
    assert!(out.contains("Prompt actual: 'EAFITos'"));
}

#[test]
fn calc_errors_are_reported_and_the_loop_continues() {
    let (exit, out) = drive(&plain_session(), "calc 1 / 0\ncalc 1 % 2\ncalc 1 +\ncalc 3 - 1\n");
    assert_eq!(exit, Exit::EndOfInput);
    assert!(out.contains("[ERROR] División por cero no permitida."));
    assert!(out.contains("Operador '%' no reconocido"));
    assert!(out.contains("Uso: calc <num1> <operador> <num2>"));
    assert!(out.contains("Resultado: 2.00"));
}

#[test]
fn general_help_lists_every_command() {
    let (_, out) = drive(&plain_session(), "ayuda\n");
    for name in BUILTINS.names() {
        assert!(out.contains(name), "missing {}", name);
    }
    assert!(out.contains("Archivos y Directorios:"));
    assert!(out.contains("Sistema:"));
    assert!(out.contains("Shell:"));
}

#[test]
fn detailed_help_and_missing_topic() {
    let (_, out) = drive(&plain_session(), "ayuda calc\nayuda volar\n");
    assert!(out.contains("Comando: calc"));
    assert!(out.contains("calc <n1> <op> <n2>"));
    assert!(out.contains("calc 100 / 4"));
    assert!(out.contains("No existe ayuda para el comando: 'volar'"));
}

#[test]
fn tiempo_prints_a_timestamp() {
    let (_, out) = drive(&plain_session(), "tiempo\n");
    assert!(out.contains("Fecha y Hora del Sistema: "));
}

#[test]
fn limpiar_emits_the_clear_sequence() {
    let (_, out) = drive(&plain_session(), "limpiar\n");
    assert!(out.contains("\x1b[2J\x1b[3J\x1b[H"));
}

#[test]
fn colored_prompt_uses_cyan_bold() {
    let session = Session::new("c", Style::new(true));
    let (_, out) = drive(&session, "");
    assert!(out.starts_with("\x1b[1;36m\x1b[1mc\x1b[0m> "));
}
