//! Módulo `excel` dividido en submódulos para mantener el código organizado.
//!
//! Submódulos:
//! - `io`: helpers para el parseo de celdas de Excel
//! - `matriz`: lectura de la hoja de competencias → `MatrizCobertura`
//! - `generador`: escritura de un workbook de ejemplo

/// Helpers de IO para parsing de celdas
mod io;

/// Lectura de la matriz de cobertura: `leer_matriz_excel`
mod matriz;

/// Generador del Excel de ejemplo: `crear_ejemplo`
mod generador;

pub use generador::{crear_ejemplo, COMPETENCIAS};
pub use io::data_to_string;
pub use matriz::{leer_matriz_excel, NOMBRE_HOJA};
