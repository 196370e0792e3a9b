use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::error::Error;
use std::path::Path;

use crate::excel::matriz::NOMBRE_HOJA;

/// Competencias transversales del plan (filas del Excel de ejemplo).
pub const COMPETENCIAS: [&str; 12] = [
    "CT01", "CT02", "CT03", "CT04", "CT05", "CT06", "CT07", "CT08", "CT09", "CT10", "CT11",
    "CT12",
];

const ASIGNATURAS_1: [&str; 10] = [
    "Algebra",
    "Análisis matemático",
    "Estadística",
    "Fundamentos de computadores",
    "Fundamentos de organización de empresas",
    "Fundamentos Físicos de la Informática",
    "Introducción a la informática y a la programación",
    "Matemática discreta",
    "Programación",
    "Tecnología de computadores",
];

const ASIGNATURAS_2: [&str; 9] = [
    "Concurrencia y sistemas distribuidos",
    "Deontología y profesionalismo",
    "Estructura de computadores",
    "Estructuras de datos y algoritmos",
    "Fundamentos de sistemas operativos",
    "Interfaces persona computador",
    "Lenguajes, tecnologías y paradigmas de la programación",
    "Redes de computadores",
    "Teoría de autómatas y lenguajes formales",
];

const ASIGNATURAS_3: [&str; 16] = [
    "Administración de sistemas",
    "Agentes inteligentes",
    "Análisis de requisitos de negocio",
    "Calidad de software",
    "Ciberseguridad",
    "Computabilidad y complejidad",
    "Desarrollo web",
    "Diseño de software",
    "Diseño y configuración de redes de área local",
    "Gestión de las tecnologías de la información",
    "Intercambio académico IX",
    "Internet de las Cosas",
    "Percepción",
    "Proceso de software",
    "Técnicas de optimización",
    "Tecnología de bases de datos",
];

const ASIGNATURAS_4: [&str; 16] = [
    "Algorítmica",
    "Análisis avanzado de datos en Ingeniería Informática",
    "Análisis y especificación de requisitos",
    "Aprendizaje automático",
    "Bioinformática",
    "Competición de programación",
    "Computación científica",
    "Criptografía",
    "Desarrollo de aplicaciones para dispositivos móviles",
    "Diseño de sitios web",
    "Hacking ético",
    "Integración de aplicaciones",
    "Lenguajes de programación y procesadores de lenguajes",
    "Mantenimiento y evolución de software",
    "Redes corporativas",
    "Seguridad en los sistemas informáticos",
];

const MAX_ASIGNATURAS_POR_CURSO: usize = 10;

/// Escribe un workbook de ejemplo con niveles aleatorios reproducibles.
///
/// La hoja queda con la forma que espera `leer_matriz_excel`: esquina
/// "Competencia", encabezados `<curso>_<asignatura>` y una fila por
/// competencia con niveles 0..=3. La misma semilla produce el mismo archivo.
pub fn crear_ejemplo<P: AsRef<Path>>(ruta: P, semilla: u64) -> Result<(), Box<dyn Error>> {
    let mut rng = StdRng::seed_from_u64(semilla);

    let mut columnas: Vec<String> = Vec::new();
    let cursos: [(i32, &[&str]); 4] = [
        (1, &ASIGNATURAS_1),
        (2, &ASIGNATURAS_2),
        (3, &ASIGNATURAS_3),
        (4, &ASIGNATURAS_4),
    ];
    for (curso, disponibles) in cursos {
        let n = MAX_ASIGNATURAS_POR_CURSO.min(disponibles.len());
        for asignatura in disponibles.choose_multiple(&mut rng, n) {
            columnas.push(format!("{}_{}", curso, asignatura));
        }
    }

    let mut libro = umya_spreadsheet::new_file();
    let hoja = libro
        .get_sheet_by_name_mut("Sheet1")
        .map_err(Box::<dyn Error>::from)?;
    hoja.set_title(NOMBRE_HOJA);

    hoja.get_cell_mut(celda(1, 1).as_str()).set_value("Competencia");
    for (j, columna) in columnas.iter().enumerate() {
        hoja.get_cell_mut(celda((j + 2) as u32, 1).as_str())
            .set_value(columna);
    }

    for (i, competencia) in COMPETENCIAS.iter().enumerate() {
        let fila = (i + 2) as u32;
        hoja.get_cell_mut(celda(1, fila).as_str())
            .set_value(*competencia);
        for j in 0..columnas.len() {
            let nivel: i32 = rng.gen_range(0..=3);
            hoja.get_cell_mut(celda((j + 2) as u32, fila).as_str())
                .set_value(nivel.to_string());
        }
    }

    umya_spreadsheet::writer::xlsx::write(&libro, ruta.as_ref())
        .map_err(|e| Box::<dyn Error>::from(format!("{e:?}")))?;
    Ok(())
}

/// Coordenada estilo "A1" a partir de columna y fila 1-based.
fn celda(columna: u32, fila: u32) -> String {
    umya_spreadsheet::helper::coordinate::coordinate_from_index(&columna, &fila)
}
