use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontTransform;
use std::error::Error;
use std::path::Path;

use crate::analisis::{
    carga_por_asignatura, distribucion_niveles, frecuencia_por_competencia, intensidad_por_curso,
    MINIMO_RECOMENDADO,
};
use crate::graficos::paleta::{color_banda, color_carga, COLOR_MINIMO, COLOR_POCO, PALETA_NIVELES};
use crate::models::MatrizOrdenada;

const ETIQUETAS_NIVEL: [&str; 4] = ["No trabaja", "Introducción", "Desarrollo", "Dominio"];

/// Dibuja el dashboard 2×2 de estadísticas y lo guarda como PNG:
/// frecuencia por competencia, carga por asignatura, distribución de niveles
/// e intensidad por curso.
pub fn generar_estadisticas<P: AsRef<Path>>(
    matriz: &MatrizOrdenada,
    ruta: P,
) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(ruta.as_ref(), (1600, 1200)).into_drawing_area();
    root.fill(&WHITE)?;
    let root = root.titled("Análisis de competencias", ("sans-serif", 28))?;

    let paneles = root.split_evenly((2, 2));
    panel_frecuencia(&paneles[0], matriz)?;
    panel_carga(&paneles[1], matriz)?;
    panel_niveles(&paneles[2], matriz)?;
    panel_intensidad(&paneles[3], matriz)?;

    root.present()?;
    Ok(())
}

/// Barras horizontales, una por competencia, coloreadas por banda, con la
/// línea vertical del mínimo recomendado.
fn panel_frecuencia(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    matriz: &MatrizOrdenada,
) -> Result<(), Box<dyn Error>> {
    let frecuencias = frecuencia_por_competencia(matriz, MINIMO_RECOMENDADO);
    let n = frecuencias.len() as i32;
    let max_x = frecuencias
        .iter()
        .map(|f| f.frecuencia)
        .max()
        .unwrap_or(0)
        .max(MINIMO_RECOMENDADO) as i32
        + 1;

    let mut chart = ChartBuilder::on(area)
        .caption(
            "Frecuencia de trabajo por competencia",
            ("sans-serif", 18),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(90)
        .build_cartesian_2d(0i32..max_x, 0i32..n)?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .x_desc("Número de asignaturas que la trabajan")
        .y_labels(frecuencias.len())
        .y_label_formatter(&|y| {
            let idx = (*y).clamp(0, n - 1) as usize;
            frecuencias[idx].competencia.clone()
        })
        .draw()?;

    chart.draw_series(frecuencias.iter().enumerate().map(|(i, f)| {
        Rectangle::new(
            [(0, i as i32), (f.frecuencia as i32, i as i32 + 1)],
            color_banda(f.banda).filled(),
        )
    }))?;

    chart.draw_series(std::iter::once(PathElement::new(
        vec![
            (MINIMO_RECOMENDADO as i32, 0),
            (MINIMO_RECOMENDADO as i32, n),
        ],
        COLOR_MINIMO.stroke_width(2),
    )))?;

    Ok(())
}

/// Barras verticales de carga por asignatura, con rampa rojo→verde
/// normalizada contra la carga máxima de la ejecución.
fn panel_carga(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    matriz: &MatrizOrdenada,
) -> Result<(), Box<dyn Error>> {
    let cargas = carga_por_asignatura(matriz);
    let n = cargas.len() as i32;
    let max_carga = cargas.iter().map(|c| c.carga).max().unwrap_or(0).max(1);

    let mut chart = ChartBuilder::on(area)
        .caption("Carga de competencias por asignatura", ("sans-serif", 18))
        .margin(10)
        .x_label_area_size(170)
        .y_label_area_size(50)
        .build_cartesian_2d(0i32..n, 0i32..max_carga + 1)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .y_desc("Suma de niveles de competencias")
        .x_labels(cargas.len())
        .x_label_style(
            ("sans-serif", 10)
                .into_font()
                .transform(FontTransform::Rotate90),
        )
        .x_label_formatter(&|x| {
            let idx = (*x).clamp(0, n - 1) as usize;
            cargas[idx].asignatura.clone()
        })
        .draw()?;

    chart.draw_series(cargas.iter().enumerate().map(|(j, c)| {
        let t = c.carga as f64 / max_carga as f64;
        Rectangle::new(
            [(j as i32, 0), (j as i32 + 1, c.carga)],
            color_carga(t).filled(),
        )
    }))?;

    Ok(())
}

/// Histograma de niveles con la paleta del heatmap y borde negro.
fn panel_niveles(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    matriz: &MatrizOrdenada,
) -> Result<(), Box<dyn Error>> {
    let distribucion = distribucion_niveles(matriz);
    let max_conteo = distribucion.conteos.iter().copied().max().unwrap_or(0).max(1) as i32;

    let mut chart = ChartBuilder::on(area)
        .caption("Distribución de niveles de trabajo", ("sans-serif", 18))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0i32..4i32, 0i32..max_conteo + max_conteo / 10 + 1)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Nivel")
        .y_desc("Frecuencia")
        .x_labels(4)
        .x_label_formatter(&|x| {
            let idx = (*x).clamp(0, 3) as usize;
            ETIQUETAS_NIVEL[idx].to_string()
        })
        .draw()?;

    chart.draw_series(distribucion.conteos.iter().enumerate().map(|(nivel, &conteo)| {
        Rectangle::new(
            [(nivel as i32, 0), (nivel as i32 + 1, conteo as i32)],
            PALETA_NIVELES[nivel].filled(),
        )
    }))?;
    chart.draw_series(distribucion.conteos.iter().enumerate().map(|(nivel, &conteo)| {
        Rectangle::new(
            [(nivel as i32, 0), (nivel as i32 + 1, conteo as i32)],
            BLACK.stroke_width(1),
        )
    }))?;

    Ok(())
}

/// Línea con marcadores y relleno translúcido: suma total de niveles por
/// curso, en orden ascendente de curso.
fn panel_intensidad(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    matriz: &MatrizOrdenada,
) -> Result<(), Box<dyn Error>> {
    let intensidades = intensidad_por_curso(matriz);
    let n = intensidades.len() as i32;
    let max_total = intensidades.iter().map(|i| i.total).max().unwrap_or(0).max(1);

    let mut chart = ChartBuilder::on(area)
        .caption("Intensidad de competencias por curso", ("sans-serif", 18))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(-1i32..n, 0i32..max_total + max_total / 10 + 1)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .y_desc("Suma total de niveles")
        .x_labels(intensidades.len())
        .x_label_formatter(&|x| {
            if *x < 0 || *x >= n {
                return String::new();
            }
            format!("{}º", intensidades[*x as usize].curso)
        })
        .draw()?;

    let puntos: Vec<(i32, i32)> = intensidades
        .iter()
        .enumerate()
        .map(|(k, i)| (k as i32, i.total))
        .collect();

    chart.draw_series(
        AreaSeries::new(puntos.iter().copied(), 0, COLOR_POCO.mix(0.3))
            .border_style(COLOR_POCO.stroke_width(2)),
    )?;
    chart.draw_series(
        puntos
            .iter()
            .map(|&(x, y)| Circle::new((x, y), 5, COLOR_POCO.filled())),
    )?;

    Ok(())
}
