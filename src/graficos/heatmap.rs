use plotters::prelude::*;
use plotters::style::{FontDesc, FontFamily, FontStyle, FontTransform};
use std::error::Error;
use std::path::Path;

use crate::graficos::paleta::color_nivel;
use crate::models::MatrizOrdenada;

/// Opciones de render del heatmap.
pub struct OpcionesHeatmap {
    /// Dibujar separadores verticales donde cambia el curso.
    pub separadores_curso: bool,
    /// Añadir la leyenda de niveles bajo la figura.
    pub leyenda: bool,
}

impl Default for OpcionesHeatmap {
    fn default() -> Self {
        OpcionesHeatmap {
            separadores_curso: true,
            leyenda: true,
        }
    }
}

/// Dibuja el heatmap competencia × asignatura y lo guarda como PNG.
///
/// El tamaño de la figura crece con la matriz para que las celdas no se
/// aplasten con planes grandes. La fila 0 de la matriz queda arriba.
pub fn generar_heatmap<P: AsRef<Path>>(
    matriz: &MatrizOrdenada,
    opciones: &OpcionesHeatmap,
    ruta: P,
) -> Result<(), Box<dyn Error>> {
    let n_asig = matriz.n_asignaturas();
    let n_comp = matriz.n_competencias();

    let ancho = (n_asig as u32 * 34).max(1400);
    let alto = (n_comp as u32 * 40).max(560) + 300;

    let root = BitMapBackend::new(ruta.as_ref(), (ancho, alto)).into_drawing_area();
    root.fill(&WHITE)?;

    let (area_grafico, area_pie) = root.split_vertically((alto - 50) as i32);

    let mut chart = ChartBuilder::on(&area_grafico)
        .caption("Heatmap de competencias", ("sans-serif", 26))
        .margin(12)
        .x_label_area_size(210)
        .y_label_area_size(90)
        .build_cartesian_2d(0i32..n_asig as i32, 0i32..n_comp as i32)?;

    let asignaturas = &matriz.asignaturas;
    let competencias = &matriz.competencias;
    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Asignaturas (ordenadas por curso)")
        .y_desc("Competencias Transversales")
        .x_labels(n_asig)
        .y_labels(n_comp)
        .x_label_style(
            ("sans-serif", 11)
                .into_font()
                .transform(FontTransform::Rotate90),
        )
        .y_label_style(("sans-serif", 11))
        .x_label_formatter(&|x| {
            let idx = (*x).clamp(0, n_asig.saturating_sub(1) as i32) as usize;
            asignaturas[idx].asignatura.clone()
        })
        .y_label_formatter(&|y| {
            let idx = (*y).clamp(0, n_comp.saturating_sub(1) as i32) as usize;
            competencias[n_comp - 1 - idx].clone()
        })
        .draw()?;

    let (px_ancho, px_alto) = chart.plotting_area().dim_in_pixel();
    let medio_x = (px_ancho / n_asig.max(1) as u32 / 2) as i32;
    let medio_y = (px_alto / n_comp.max(1) as u32 / 2) as i32;

    for (i, fila) in matriz.niveles.iter().enumerate() {
        let y = (n_comp - 1 - i) as i32;
        for (j, &nivel) in fila.iter().enumerate() {
            let x = j as i32;
            chart.draw_series(std::iter::once(Rectangle::new(
                [(x, y), (x + 1, y + 1)],
                color_nivel(nivel).filled(),
            )))?;
            chart.draw_series(std::iter::once(Rectangle::new(
                [(x, y), (x + 1, y + 1)],
                WHITE.stroke_width(1),
            )))?;

            let color_texto = if nivel >= 3 { &WHITE } else { &BLACK };
            chart.draw_series(std::iter::once(
                EmptyElement::at((x, y + 1))
                    + Text::new(
                        format!("{}", nivel),
                        (medio_x - 4, medio_y - 7),
                        ("sans-serif", 12).into_font().color(color_texto),
                    ),
            ))?;
        }
    }

    if opciones.separadores_curso {
        for j in 1..n_asig {
            if asignaturas[j].curso != asignaturas[j - 1].curso {
                chart.draw_series(std::iter::once(PathElement::new(
                    vec![(j as i32, 0), (j as i32, n_comp as i32)],
                    BLACK.mix(0.7).stroke_width(2),
                )))?;
            }
        }
    }

    if opciones.leyenda {
        area_pie.draw(&Text::new(
            "Niveles: 0=No trabaja | 1=Introducción | 2=Desarrollo | 3=Dominio",
            (40, 15),
            FontDesc::new(FontFamily::SansSerif, 16.0, FontStyle::Italic).color(&BLACK),
        ))?;
    }

    root.present()?;
    Ok(())
}
