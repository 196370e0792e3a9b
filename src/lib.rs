// Biblioteca raíz del crate `ctmapa`.
// Reexporta los módulos principales; el flujo completo (excel → matriz
// ordenada → gráficos + resumen) lo orquesta `main`.
pub mod analisis;
mod error;
pub mod excel;
pub mod graficos;
pub mod matriz;
pub mod models;

pub use error::MapeoError;
