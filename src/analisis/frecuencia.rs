use serde::Serialize;

use crate::models::MatrizOrdenada;

/// Mínimo de asignaturas recomendado para dar una competencia por cubierta.
pub const MINIMO_RECOMENDADO: usize = 3;

/// Banda de cobertura de una competencia, para colorear el panel de
/// frecuencias: rojo=nunca, azul=poco, verde=adecuado.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BandaCobertura {
    /// Ninguna asignatura la trabaja.
    NuncaTrabajada,
    /// La trabajan menos asignaturas que el mínimo recomendado.
    PocoTrabajada,
    /// Alcanza el mínimo recomendado.
    Adecuada,
}

#[derive(Debug, Clone, Serialize)]
pub struct FrecuenciaCompetencia {
    pub competencia: String,
    /// Nº de asignaturas con nivel > 0.
    pub frecuencia: usize,
    pub banda: BandaCobertura,
}

/// Frecuencia de trabajo por competencia, ascendente por frecuencia (los
/// empates conservan el orden de entrada de las competencias).
pub fn frecuencia_por_competencia(
    matriz: &MatrizOrdenada,
    minimo: usize,
) -> Vec<FrecuenciaCompetencia> {
    let mut resultado: Vec<FrecuenciaCompetencia> = matriz
        .competencias
        .iter()
        .zip(matriz.niveles.iter())
        .map(|(competencia, fila)| {
            let frecuencia = fila.iter().filter(|&&nivel| nivel > 0).count();
            let banda = if frecuencia == 0 {
                BandaCobertura::NuncaTrabajada
            } else if frecuencia < minimo {
                BandaCobertura::PocoTrabajada
            } else {
                BandaCobertura::Adecuada
            };
            FrecuenciaCompetencia {
                competencia: competencia.clone(),
                frecuencia,
                banda,
            }
        })
        .collect();

    resultado.sort_by_key(|f| f.frecuencia);
    resultado
}
