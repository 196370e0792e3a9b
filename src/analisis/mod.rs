//! Vistas analíticas derivadas de la matriz ordenada.
//!
//! Las cuatro vistas son reducciones puras e independientes sobre la misma
//! matriz; cada una puede pedirse por separado y recalcular con la misma
//! entrada produce exactamente el mismo resultado.
//!
//! Submódulos:
//! - `frecuencia`: nº de asignaturas que trabajan cada competencia
//! - `carga`: suma de niveles por asignatura
//! - `niveles`: histograma global de niveles 0..3
//! - `intensidad`: suma total de niveles por curso
//! - `resumen`: agregado serializable de las cuatro vistas

pub mod carga;
pub mod frecuencia;
pub mod intensidad;
pub mod niveles;
pub mod resumen;

pub use carga::{carga_por_asignatura, CargaAsignatura};
pub use frecuencia::{
    frecuencia_por_competencia, BandaCobertura, FrecuenciaCompetencia, MINIMO_RECOMENDADO,
};
pub use intensidad::{intensidad_por_curso, IntensidadCurso};
pub use niveles::{distribucion_niveles, DistribucionNiveles};
pub use resumen::ResumenAnalisis;
