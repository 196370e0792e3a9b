/// Curso centinela para columnas sin prefijo reconocible. Las asignaturas
/// sin clasificar no se descartan: se ordenan al final.
pub const CURSO_SIN_CLASIFICAR: i32 = 99;

/// Deriva el número de curso del nombre de columna `<curso>_<asignatura>`.
///
/// El token antes del primer `_` puede llevar el marcador ordinal (`º`) o la
/// letra de código de curso (`C`): `"1º_Algebra"`, `"C2_Redes"` y `"3_Física"`
/// clasifican a 1, 2 y 3. Sin delimitador, o con un token que no parsea como
/// entero, devuelve `sentinela`.
pub fn curso_de_columna_con_sentinela(nombre: &str, sentinela: i32) -> i32 {
    let token = match nombre.split_once('_') {
        Some((antes, _)) => antes,
        None => return sentinela,
    };

    let numero: String = token.chars().filter(|c| *c != 'º' && *c != 'C').collect();
    numero.trim().parse::<i32>().unwrap_or(sentinela)
}

/// Variante con el centinela por defecto.
pub fn curso_de_columna(nombre: &str) -> i32 {
    curso_de_columna_con_sentinela(nombre, CURSO_SIN_CLASIFICAR)
}
