use crate::matriz::curso::curso_de_columna_con_sentinela;
use crate::models::{AsignaturaCurso, MatrizCobertura, MatrizOrdenada};

/// Reordena las columnas por curso ascendente y devuelve la matriz junto con
/// los pares asignatura/curso en el mismo orden.
///
/// El sort es estable: dos columnas del mismo curso conservan su orden de
/// entrada, así que la salida es reproducible entre ejecuciones con el mismo
/// Excel. Las columnas con curso `sentinela` quedan al final.
pub fn ordenar_por_curso(matriz: &MatrizCobertura, sentinela: i32) -> MatrizOrdenada {
    let cursos: Vec<i32> = matriz
        .asignaturas
        .iter()
        .map(|a| curso_de_columna_con_sentinela(a, sentinela))
        .collect();

    let mut indices: Vec<usize> = (0..matriz.asignaturas.len()).collect();
    indices.sort_by_key(|&j| cursos[j]);

    let asignaturas: Vec<AsignaturaCurso> = indices
        .iter()
        .map(|&j| AsignaturaCurso {
            asignatura: matriz.asignaturas[j].clone(),
            curso: cursos[j],
        })
        .collect();

    let niveles: Vec<Vec<i32>> = matriz
        .niveles
        .iter()
        .map(|fila| indices.iter().map(|&j| fila[j]).collect())
        .collect();

    MatrizOrdenada {
        competencias: matriz.competencias.clone(),
        asignaturas,
        niveles,
    }
}
