use serde::Serialize;

use crate::models::MatrizOrdenada;

#[derive(Debug, Clone, Serialize)]
pub struct CargaAsignatura {
    pub asignatura: String,
    /// Suma de niveles de todas las competencias en esta asignatura.
    pub carga: i32,
}

/// Carga de competencias por asignatura, en el orden de las columnas
/// ordenadas. La normalización para el color (carga / máximo) la hace el
/// adaptador de presentación, no esta vista.
pub fn carga_por_asignatura(matriz: &MatrizOrdenada) -> Vec<CargaAsignatura> {
    matriz
        .asignaturas
        .iter()
        .enumerate()
        .map(|(j, info)| {
            let carga: i32 = matriz.niveles.iter().map(|fila| fila[j]).sum();
            CargaAsignatura {
                asignatura: info.asignatura.clone(),
                carga,
            }
        })
        .collect()
}
