//! Adaptador de presentación: render del heatmap y del dashboard con
//! `plotters`. Toda la decisión de estilo (paleta, layout, etiquetas) vive
//! aquí; el núcleo sólo entrega datos planos.

/// Paleta de niveles y colores de banda
pub mod paleta;

/// Heatmap competencia × asignatura: `generar_heatmap`
mod heatmap;

/// Dashboard 2×2 de estadísticas: `generar_estadisticas`
mod estadisticas;

pub use estadisticas::generar_estadisticas;
pub use heatmap::{generar_heatmap, OpcionesHeatmap};
