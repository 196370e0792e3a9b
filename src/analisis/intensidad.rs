use serde::Serialize;

use crate::models::MatrizOrdenada;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IntensidadCurso {
    pub curso: i32,
    /// Suma de todos los niveles de todas las asignaturas del curso.
    pub total: i32,
}

/// Intensidad de competencias por curso, en orden ascendente de curso (el
/// centinela 99 queda al final). Un curso sin asignaturas simplemente no
/// aparece; una matriz sin columnas daría un vector vacío, nunca un error.
pub fn intensidad_por_curso(matriz: &MatrizOrdenada) -> Vec<IntensidadCurso> {
    let mut cursos: Vec<i32> = matriz.asignaturas.iter().map(|a| a.curso).collect();
    cursos.sort_unstable();
    cursos.dedup();

    cursos
        .into_iter()
        .map(|curso| {
            let total: i32 = matriz
                .asignaturas
                .iter()
                .enumerate()
                .filter(|(_, a)| a.curso == curso)
                .map(|(j, _)| matriz.niveles.iter().map(|fila| fila[j]).sum::<i32>())
                .sum();
            IntensidadCurso { curso, total }
        })
        .collect()
}
