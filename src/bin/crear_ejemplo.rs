// --- Generador del Excel de ejemplo ---

use ctmapa::excel::crear_ejemplo;

const ARCHIVO_SALIDA: &str = "ejemplo.xlsx";
const SEMILLA_POR_DEFECTO: u64 = 99;

fn main() {
    println!("=== Generador de Excel de ejemplo ===");

    let semilla = std::env::var("CTMAPA_SEMILLA")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(SEMILLA_POR_DEFECTO);

    match crear_ejemplo(ARCHIVO_SALIDA, semilla) {
        Ok(()) => println!("✅ Ejemplo guardado en {}", ARCHIVO_SALIDA),
        Err(e) => {
            eprintln!("Error al crear el ejemplo: {}", e);
            std::process::exit(1);
        }
    }
}
