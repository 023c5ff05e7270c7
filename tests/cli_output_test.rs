use anyhow::Result;
use std::process::Command;
use tempfile::TempDir;

/// 在指定目錄執行 postal-analyzer，回傳 stdout
fn run_in(dir: &TempDir) -> Result<String> {
    let output = Command::new(env!("CARGO_BIN_EXE_postal-analyzer"))
        .current_dir(dir.path())
        .env("RUST_LOG", "off")
        .output()?;

    assert!(output.status.success());
    Ok(String::from_utf8(output.stdout)?)
}

#[test]
fn test_missing_file_console_sequence() -> Result<()> {
    let dir = TempDir::new()?;

    let stdout = run_in(&dir)?;
    let expected = "\
Analizador de Códigos Postales - Hermosillo
Procesando archivo: codigos_postales_hmo.csv

Error: No se pudo encontrar el archivo codigos_postales_hmo.csv
Verifique que el archivo existe en el directorio actual
Error: No se pudo procesar el archivo codigos_postales_hmo.csv
Verifique que el archivo existe en el directorio actual.
";

    assert_eq!(stdout, expected);
    assert!(!stdout.contains("Leyendo archivo"));
    Ok(())
}

#[test]
fn test_report_console_sequence() -> Result<()> {
    let dir = TempDir::new()?;
    std::fs::write(
        dir.path().join("codigos_postales_hmo.csv"),
        "Codigo Postal,Asentamiento\n83200,Pitic\n83100,Centro\n83100,Ley\n90000,Invalid\n",
    )?;

    let stdout = run_in(&dir)?;
    let expected = "\
Analizador de Códigos Postales - Hermosillo
Procesando archivo: codigos_postales_hmo.csv

Leyendo archivo: codigos_postales_hmo.csv...

Archivo procesado correctamente

Resultados del análisis:
========================
Código postal: 83100 - Número de asentamientos: 2
Código postal: 83200 - Número de asentamientos: 1

Análisis completado.
Total de códigos postales procesados: 2
";

    assert_eq!(stdout, expected);
    Ok(())
}

#[test]
fn test_carriage_return_only_file() -> Result<()> {
    let dir = TempDir::new()?;
    std::fs::write(
        dir.path().join("codigos_postales_hmo.csv"),
        "Codigo,Postal\r83100,Centro\r83100,Ley\r",
    )?;

    let stdout = run_in(&dir)?;
    assert!(stdout.contains("Código postal: 83100 - Número de asentamientos: 2\n"));
    assert!(stdout.ends_with("Total de códigos postales procesados: 1\n"));
    Ok(())
}

#[test]
fn test_empty_file_prints_no_data() -> Result<()> {
    let dir = TempDir::new()?;
    std::fs::write(dir.path().join("codigos_postales_hmo.csv"), "")?;

    let stdout = run_in(&dir)?;
    assert!(stdout.ends_with(
        "Archivo procesado correctamente\nNo se encontraron datos para procesar.\n"
    ));
    Ok(())
}
