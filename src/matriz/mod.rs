//! Núcleo de normalización y ordenación de la matriz de cobertura.
//!
//! Submódulos:
//! - `normalizar`: limpieza de etiquetas y coerción de celdas a niveles
//! - `curso`: clasificación `<curso>_<asignatura>` → número de curso
//! - `ordenar`: orden estable de columnas por curso

/// Limpieza de etiquetas y coerción de celdas: `normalizar`
mod normalizar;

/// Clasificación de columnas por curso: `curso_de_columna`
mod curso;

/// Orden estable de columnas por curso: `ordenar_por_curso`
mod ordenar;

pub use curso::{curso_de_columna, curso_de_columna_con_sentinela, CURSO_SIN_CLASIFICAR};
pub use normalizar::{nivel_desde_texto, normalizar};
pub use ordenar::ordenar_por_curso;
