use ctmapa::matriz::{normalizar, ordenar_por_curso, CURSO_SIN_CLASIFICAR};
use ctmapa::models::MatrizCobertura;

fn matriz_de(columnas: &[&str], filas: &[(&str, &[&str])]) -> MatrizCobertura {
    let columnas: Vec<String> = columnas.iter().map(|s| s.to_string()).collect();
    let etiquetas: Vec<String> = filas.iter().map(|(id, _)| id.to_string()).collect();
    let celdas: Vec<Vec<String>> = filas
        .iter()
        .map(|(_, fila)| fila.iter().map(|s| s.to_string()).collect())
        .collect();
    normalizar(&etiquetas, &columnas, &celdas).expect("matriz válida")
}

#[test]
fn test_ordena_por_curso_estable() {
    let matriz = matriz_de(
        &["1_Algebra", "2_Redes", "1_Programación"],
        &[("CT01", &["1", "2", "3"])],
    );
    let ordenada = ordenar_por_curso(&matriz, CURSO_SIN_CLASIFICAR);

    let nombres: Vec<&str> = ordenada
        .asignaturas
        .iter()
        .map(|a| a.asignatura.as_str())
        .collect();
    assert_eq!(nombres, vec!["1_Algebra", "1_Programación", "2_Redes"]);

    let cursos: Vec<i32> = ordenada.asignaturas.iter().map(|a| a.curso).collect();
    assert_eq!(cursos, vec![1, 1, 2]);
}

#[test]
fn test_sin_clasificar_queda_al_final() {
    let matriz = matriz_de(
        &["Intercambio académico IX", "1_Algebra", "2_Redes"],
        &[("CT01", &["0", "0", "0"])],
    );
    let ordenada = ordenar_por_curso(&matriz, CURSO_SIN_CLASIFICAR);

    let ultima = ordenada.asignaturas.last().expect("hay columnas");
    assert_eq!(ultima.asignatura, "Intercambio académico IX");
    assert_eq!(ultima.curso, CURSO_SIN_CLASIFICAR);
}

#[test]
fn test_reordena_celdas_con_sus_columnas() {
    let matriz = matriz_de(
        &["2_Redes", "1_Algebra"],
        &[("CT01", &["3", "1"]), ("CT02", &["0", "2"])],
    );
    let ordenada = ordenar_por_curso(&matriz, CURSO_SIN_CLASIFICAR);

    assert_eq!(ordenada.asignaturas[0].asignatura, "1_Algebra");
    assert_eq!(ordenada.niveles, vec![vec![1, 3], vec![2, 0]]);
    assert_eq!(ordenada.nivel(0, 1), 3);
}

#[test]
fn test_ordenar_es_determinista() {
    let matriz = matriz_de(
        &["3_Percepción", "1_Algebra", "3_Ciberseguridad", "2_Redes"],
        &[("CT01", &["1", "1", "1", "1"])],
    );
    let primera = ordenar_por_curso(&matriz, CURSO_SIN_CLASIFICAR);
    let segunda = ordenar_por_curso(&matriz, CURSO_SIN_CLASIFICAR);

    let nombres = |m: &ctmapa::models::MatrizOrdenada| -> Vec<String> {
        m.asignaturas.iter().map(|a| a.asignatura.clone()).collect()
    };
    assert_eq!(nombres(&primera), nombres(&segunda));
    assert_eq!(primera.niveles, segunda.niveles);
}

#[test]
fn test_pares_paralelos_a_columnas() {
    let matriz = matriz_de(
        &["2_Redes", "1_Algebra", "Intercambio académico IX"],
        &[("CT01", &["1", "2", "3"])],
    );
    let ordenada = ordenar_por_curso(&matriz, CURSO_SIN_CLASIFICAR);

    assert_eq!(ordenada.asignaturas.len(), ordenada.niveles[0].len());
    for (j, par) in ordenada.asignaturas.iter().enumerate() {
        let posicion_entrada = matriz
            .asignaturas
            .iter()
            .position(|a| *a == par.asignatura)
            .expect("columna presente en la entrada");
        assert_eq!(ordenada.niveles[0][j], matriz.niveles[0][posicion_entrada]);
    }
}
