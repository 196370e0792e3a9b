use ctmapa::matriz::{curso_de_columna, curso_de_columna_con_sentinela, CURSO_SIN_CLASIFICAR};

#[test]
fn test_curso_basico() {
    assert_eq!(curso_de_columna("1_Algebra"), 1);
    assert_eq!(curso_de_columna("2_Redes de computadores"), 2);
    assert_eq!(curso_de_columna("4_Aprendizaje automático"), 4);
}

#[test]
fn test_curso_con_marcadores() {
    // "1º_..." lleva el marcador ordinal; "C2_..." la letra de código de curso
    assert_eq!(curso_de_columna("1º_Algebra"), 1);
    assert_eq!(curso_de_columna("C2_Redes"), 2);
    assert_eq!(curso_de_columna("C3º_Física"), 3);
}

#[test]
fn test_curso_sin_delimitador() {
    assert_eq!(curso_de_columna("Intercambio académico IX"), CURSO_SIN_CLASIFICAR);
}

#[test]
fn test_curso_token_no_numerico() {
    assert_eq!(curso_de_columna("optativa_Diseño web"), CURSO_SIN_CLASIFICAR);
    assert_eq!(curso_de_columna("_Diseño web"), CURSO_SIN_CLASIFICAR);
}

#[test]
fn test_curso_sentinela_configurable() {
    assert_eq!(curso_de_columna_con_sentinela("Intercambio académico IX", -1), -1);
    assert_eq!(curso_de_columna_con_sentinela("2_Redes", -1), 2);
}

#[test]
fn test_curso_es_determinista() {
    for _ in 0..3 {
        assert_eq!(curso_de_columna("3_Ciberseguridad"), 3);
    }
}
