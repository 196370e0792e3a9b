use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::analisis::{
    carga_por_asignatura, distribucion_niveles, frecuencia_por_competencia, intensidad_por_curso,
    CargaAsignatura, DistribucionNiveles, FrecuenciaCompetencia, IntensidadCurso,
    MINIMO_RECOMENDADO,
};
use crate::models::MatrizOrdenada;

/// Agregado serializable de las cuatro vistas, para el informe JSON que se
/// escribe junto a las imágenes.
#[derive(Debug, Clone, Serialize)]
pub struct ResumenAnalisis {
    pub generado_en: DateTime<Utc>,
    pub n_competencias: usize,
    pub n_asignaturas: usize,
    pub frecuencia_competencias: Vec<FrecuenciaCompetencia>,
    pub carga_asignaturas: Vec<CargaAsignatura>,
    pub distribucion_niveles: DistribucionNiveles,
    pub intensidad_cursos: Vec<IntensidadCurso>,
}

impl ResumenAnalisis {
    /// Recalcula las cuatro vistas sobre la matriz ordenada.
    pub fn desde_matriz(matriz: &MatrizOrdenada) -> Self {
        ResumenAnalisis {
            generado_en: Utc::now(),
            n_competencias: matriz.n_competencias(),
            n_asignaturas: matriz.n_asignaturas(),
            frecuencia_competencias: frecuencia_por_competencia(matriz, MINIMO_RECOMENDADO),
            carga_asignaturas: carga_por_asignatura(matriz),
            distribucion_niveles: distribucion_niveles(matriz),
            intensidad_cursos: intensidad_por_curso(matriz),
        }
    }
}
