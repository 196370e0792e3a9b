// Estructuras de datos principales

use serde::Serialize;

/// Matriz de cobertura competencia × asignatura tal como sale del Excel,
/// con etiquetas ya limpias y celdas ya coercionadas a nivel.
#[derive(Debug, Clone, Serialize)]
pub struct MatrizCobertura {
    /// Identificadores de competencia, en el orden del listado canónico.
    pub competencias: Vec<String>,
    /// Nombres de columna `<curso>_<asignatura>`, en el orden de entrada.
    pub asignaturas: Vec<String>,
    /// Filas en el orden de `competencias`; cada fila tiene una celda por asignatura.
    pub niveles: Vec<Vec<i32>>,
}

impl MatrizCobertura {
    pub fn n_competencias(&self) -> usize {
        self.competencias.len()
    }

    pub fn n_asignaturas(&self) -> usize {
        self.asignaturas.len()
    }
}

/// Par asignatura → curso inferido, paralelo a las columnas ordenadas.
#[derive(Debug, Clone, Serialize)]
pub struct AsignaturaCurso {
    pub asignatura: String,
    pub curso: i32,
}

/// Matriz con las columnas reordenadas por curso más la información paralela
/// de cursos. Es la matriz de trabajo del resto del programa.
#[derive(Debug, Clone, Serialize)]
pub struct MatrizOrdenada {
    pub competencias: Vec<String>,
    pub asignaturas: Vec<AsignaturaCurso>,
    pub niveles: Vec<Vec<i32>>,
}

impl MatrizOrdenada {
    pub fn n_competencias(&self) -> usize {
        self.competencias.len()
    }

    pub fn n_asignaturas(&self) -> usize {
        self.asignaturas.len()
    }

    /// Nivel de la celda (fila de competencia, columna de asignatura).
    pub fn nivel(&self, fila: usize, columna: usize) -> i32 {
        self.niveles[fila][columna]
    }
}
