use thiserror::Error;

/// Errores fatales del núcleo de mapeo.
///
/// Los fallos recuperables (celda no numérica, token de curso ilegible) no
/// aparecen aquí: se resuelven con valores por defecto sin alterar la forma
/// de la matriz.
#[derive(Error, Debug)]
pub enum MapeoError {
    /// La matriz normalizada quedó sin filas o sin columnas.
    #[error("la matriz de cobertura está vacía (sin filas o sin columnas)")]
    MatrizVacia,

    /// El workbook no contiene ninguna hoja.
    #[error("no se encontraron hojas en el archivo Excel")]
    SinHojas,
}
