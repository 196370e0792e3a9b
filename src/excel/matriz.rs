use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;

use crate::error::MapeoError;
use crate::excel::io::data_to_string;
use crate::matriz::normalizar;
use crate::models::MatrizCobertura;

/// Hoja esperada en el workbook de entrada.
pub const NOMBRE_HOJA: &str = "CT_Asignaturas";

/// Lee la hoja de competencias y devuelve la matriz ya normalizada.
///
/// Espera fila 0 = encabezados `<curso>_<asignatura>` (la celda de la esquina
/// es la etiqueta del índice y se ignora) y columna 0 = identificadores de
/// competencia. Las filas con identificador en blanco se saltan.
pub fn leer_matriz_excel<P: AsRef<Path>>(
    ruta: P,
    hoja: &str,
) -> Result<MatrizCobertura, Box<dyn std::error::Error>> {
    let mut workbook = open_workbook_auto(ruta)?;

    let nombres = workbook.sheet_names().to_owned();
    if nombres.is_empty() {
        return Err(MapeoError::SinHojas.into());
    }

    // Preferir la hoja con el nombre solicitado; si no existe, tomar la primera
    let hoja_usada = nombres
        .iter()
        .find(|s| *s == hoja)
        .cloned()
        .unwrap_or_else(|| nombres[0].clone());

    let range = workbook.worksheet_range(&hoja_usada)?;
    let mut filas_iter = range.rows();

    let encabezados: Vec<String> = match filas_iter.next() {
        Some(fila) => fila.iter().skip(1).map(data_to_string).collect(),
        None => Vec::new(),
    };

    let mut competencias: Vec<String> = Vec::new();
    let mut celdas: Vec<Vec<String>> = Vec::new();
    for fila in filas_iter {
        let id = data_to_string(fila.first().unwrap_or(&Data::Empty));
        if id.is_empty() {
            continue;
        }
        competencias.push(id);
        celdas.push(fila.iter().skip(1).map(data_to_string).collect());
    }

    Ok(normalizar(&competencias, &encabezados, &celdas)?)
}
