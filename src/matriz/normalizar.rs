use crate::error::MapeoError;
use crate::models::MatrizCobertura;

/// Coerciona el texto de una celda a un nivel 0..=3.
///
/// Acepta enteros y decimales (con coma o punto como separador). Lo que no
/// parsea como número vale 0: las hojas rellenadas a mano traen huecos y no
/// es un error. Los valores fuera de rango se recortan para que el histograma
/// de niveles siga cubriendo todas las celdas.
pub fn nivel_desde_texto(texto: &str) -> i32 {
    let limpio = texto.trim().replace(',', ".");
    match limpio.parse::<f64>() {
        Ok(v) => (v.round() as i32).clamp(0, 3),
        Err(_) => 0,
    }
}

/// Construye la `MatrizCobertura` a partir de etiquetas y celdas crudas.
///
/// Limpia espacios al inicio/final de cada etiqueta, coerciona cada celda con
/// `nivel_desde_texto` y rellena con 0 las filas cortas: un fallo de parseo
/// nunca cambia el número de filas ni de columnas.
pub fn normalizar(
    filas: &[String],
    columnas: &[String],
    celdas: &[Vec<String>],
) -> Result<MatrizCobertura, MapeoError> {
    let competencias: Vec<String> = filas.iter().map(|f| f.trim().to_string()).collect();
    let asignaturas: Vec<String> = columnas.iter().map(|c| c.trim().to_string()).collect();

    if competencias.is_empty() || asignaturas.is_empty() {
        return Err(MapeoError::MatrizVacia);
    }

    let n_columnas = asignaturas.len();
    let mut niveles: Vec<Vec<i32>> = Vec::with_capacity(competencias.len());
    for i in 0..competencias.len() {
        let cruda: &[String] = celdas.get(i).map(|f| f.as_slice()).unwrap_or(&[]);
        let mut fila = Vec::with_capacity(n_columnas);
        for j in 0..n_columnas {
            let texto = cruda.get(j).map(String::as_str).unwrap_or("");
            fila.push(nivel_desde_texto(texto));
        }
        niveles.push(fila);
    }

    Ok(MatrizCobertura {
        competencias,
        asignaturas,
        niveles,
    })
}
