// --- Mapeo de Competencias Transversales - Archivo principal ---

use std::path::Path;

use ctmapa::analisis::ResumenAnalisis;
use ctmapa::excel::{leer_matriz_excel, NOMBRE_HOJA};
use ctmapa::graficos::{generar_estadisticas, generar_heatmap, OpcionesHeatmap};
use ctmapa::matriz::{ordenar_por_curso, CURSO_SIN_CLASIFICAR};

const ARCHIVO_DATOS: &str = "ejemplo.xlsx";
const SALIDA_HEATMAP: &str = "heatmap_competencias.png";
const SALIDA_ESTADISTICAS: &str = "estadisticas_competencias.png";
const SALIDA_RESUMEN: &str = "resumen_competencias.json";

fn main() {
    println!("=== Mapeo de Competencias Transversales ===");

    let archivo = std::env::var("CTMAPA_ARCHIVO").unwrap_or_else(|_| ARCHIVO_DATOS.to_string());
    let hoja = std::env::var("CTMAPA_HOJA").unwrap_or_else(|_| NOMBRE_HOJA.to_string());
    let sentinela = std::env::var("CTMAPA_CURSO_SIN_CLASIFICAR")
        .ok()
        .and_then(|v| v.parse::<i32>().ok())
        .unwrap_or(CURSO_SIN_CLASIFICAR);

    if !Path::new(&archivo).exists() {
        println!("No se encontró el excel '{}'.", archivo);
        return;
    }

    if let Err(e) = ejecutar(&archivo, &hoja, sentinela) {
        eprintln!("Error al generar los informes: {}", e);
        std::process::exit(1);
    }
}

fn ejecutar(archivo: &str, hoja: &str, sentinela: i32) -> Result<(), Box<dyn std::error::Error>> {
    println!("Cargando datos desde: {}", archivo);
    let matriz = leer_matriz_excel(archivo, hoja)?;
    println!(
        "  {} competencias × {} asignaturas",
        matriz.n_competencias(),
        matriz.n_asignaturas()
    );

    let ordenada = ordenar_por_curso(&matriz, sentinela);

    generar_heatmap(&ordenada, &OpcionesHeatmap::default(), SALIDA_HEATMAP)?;
    println!("✅ Heatmap guardado en {}", SALIDA_HEATMAP);

    generar_estadisticas(&ordenada, SALIDA_ESTADISTICAS)?;
    println!("✅ Estadísticas guardadas en {}", SALIDA_ESTADISTICAS);

    let resumen = ResumenAnalisis::desde_matriz(&ordenada);
    std::fs::write(SALIDA_RESUMEN, serde_json::to_string_pretty(&resumen)?)?;
    println!("✅ Resumen guardado en {}", SALIDA_RESUMEN);

    Ok(())
}
