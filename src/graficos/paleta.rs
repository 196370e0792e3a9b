use plotters::style::{HSLColor, RGBColor};

use crate::analisis::BandaCobertura;

/// Paleta por nivel: blanco (no trabaja), amarillo claro (introducción),
/// naranja (desarrollo), rojo (dominio).
pub const PALETA_NIVELES: [RGBColor; 4] = [
    RGBColor(0xf7, 0xf7, 0xf7),
    RGBColor(0xfe, 0xe8, 0xc8),
    RGBColor(0xfd, 0xbb, 0x84),
    RGBColor(0xe3, 0x4a, 0x33),
];

pub const COLOR_NUNCA: RGBColor = RGBColor(0xe3, 0x4a, 0x33);
pub const COLOR_POCO: RGBColor = RGBColor(0x21, 0x66, 0xac);
pub const COLOR_ADECUADO: RGBColor = RGBColor(0x1a, 0x98, 0x50);

/// Naranja de la línea de mínimo recomendado.
pub const COLOR_MINIMO: RGBColor = RGBColor(0xff, 0xa5, 0x00);

/// Color de celda según el nivel.
pub fn color_nivel(nivel: i32) -> RGBColor {
    PALETA_NIVELES[nivel.clamp(0, 3) as usize]
}

/// Color de barra según la banda de cobertura de la competencia.
pub fn color_banda(banda: BandaCobertura) -> RGBColor {
    match banda {
        BandaCobertura::NuncaTrabajada => COLOR_NUNCA,
        BandaCobertura::PocoTrabajada => COLOR_POCO,
        BandaCobertura::Adecuada => COLOR_ADECUADO,
    }
}

/// Rampa rojo→verde para la carga relativa de una asignatura (t en 0..=1,
/// normalizado contra el máximo de la propia ejecución).
pub fn color_carga(t: f64) -> HSLColor {
    HSLColor(t.clamp(0.0, 1.0) * 120.0 / 360.0, 0.75, 0.45)
}
