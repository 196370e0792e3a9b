use ctmapa::excel::{crear_ejemplo, leer_matriz_excel, COMPETENCIAS, NOMBRE_HOJA};
use ctmapa::matriz::curso_de_columna;

#[test]
fn test_crear_y_leer_ejemplo() {
    let dir = tempfile::tempdir().expect("tempdir");
    let ruta = dir.path().join("ejemplo.xlsx");

    crear_ejemplo(&ruta, 7).expect("crear el ejemplo");
    let matriz = leer_matriz_excel(&ruta, NOMBRE_HOJA).expect("leer el ejemplo");

    assert_eq!(matriz.n_competencias(), COMPETENCIAS.len());
    assert!(matriz.n_asignaturas() > 0);
    assert_eq!(matriz.competencias[0], "CT01");

    for fila in &matriz.niveles {
        assert_eq!(fila.len(), matriz.n_asignaturas());
        assert!(fila.iter().all(|n| (0..=3).contains(n)));
    }

    // Los encabezados generados siguen la convención <curso>_<asignatura>
    for asignatura in &matriz.asignaturas {
        assert!((1..=4).contains(&curso_de_columna(asignatura)));
    }
}

#[test]
fn test_misma_semilla_mismo_ejemplo() {
    let dir = tempfile::tempdir().expect("tempdir");
    let ruta_a = dir.path().join("a.xlsx");
    let ruta_b = dir.path().join("b.xlsx");

    crear_ejemplo(&ruta_a, 42).expect("crear a");
    crear_ejemplo(&ruta_b, 42).expect("crear b");

    let matriz_a = leer_matriz_excel(&ruta_a, NOMBRE_HOJA).expect("leer a");
    let matriz_b = leer_matriz_excel(&ruta_b, NOMBRE_HOJA).expect("leer b");

    assert_eq!(matriz_a.asignaturas, matriz_b.asignaturas);
    assert_eq!(matriz_a.niveles, matriz_b.niveles);
}

#[test]
fn test_hoja_inexistente_cae_a_la_primera() {
    let dir = tempfile::tempdir().expect("tempdir");
    let ruta = dir.path().join("ejemplo.xlsx");

    crear_ejemplo(&ruta, 7).expect("crear el ejemplo");
    let matriz = leer_matriz_excel(&ruta, "NoExiste").expect("leer con fallback");

    assert_eq!(matriz.n_competencias(), COMPETENCIAS.len());
}

#[test]
fn test_archivo_inexistente_es_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let ruta = dir.path().join("no_existe.xlsx");
    assert!(leer_matriz_excel(&ruta, NOMBRE_HOJA).is_err());
}
