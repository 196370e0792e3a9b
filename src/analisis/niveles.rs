use serde::Serialize;

use crate::models::MatrizOrdenada;

/// Histograma plano de niveles sobre todas las celdas de la matriz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DistribucionNiveles {
    /// Conteo por nivel; el índice es el nivel (0..=3).
    pub conteos: [usize; 4],
}

impl DistribucionNiveles {
    /// Total de celdas contadas (= competencias × asignaturas).
    pub fn total(&self) -> usize {
        self.conteos.iter().sum()
    }
}

/// Cuenta cada celda exactamente una vez, sin importar fila ni columna.
pub fn distribucion_niveles(matriz: &MatrizOrdenada) -> DistribucionNiveles {
    let mut conteos = [0usize; 4];
    for fila in &matriz.niveles {
        for &nivel in fila {
            conteos[nivel.clamp(0, 3) as usize] += 1;
        }
    }
    DistribucionNiveles { conteos }
}
