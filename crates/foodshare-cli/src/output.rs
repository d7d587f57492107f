//! Terminal tables.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use foodshare_display::{Dashboard, EventDetail, EventRow, MapView, PortraitRow};
use foodshare_model::{FieldName, FieldState};

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn styled_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table.set_header(headers.iter().map(|label| header_cell(label)));
    apply_table_style(&mut table);
    table
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Dim)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn state_cell(state: &FieldState) -> Cell {
    match state {
        FieldState::Valid => Cell::new("ok").fg(Color::Green),
        FieldState::Invalid { .. } => Cell::new("error")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        FieldState::Untested => dim_cell("-"),
    }
}

fn optional_cell(value: Option<&str>) -> Cell {
    match value {
        Some(value) if !value.is_empty() => Cell::new(value),
        _ => dim_cell("-"),
    }
}

/// One row per input; list fields get one row per entry.
pub fn print_field_states(states: &[(FieldName, Vec<FieldState>)]) {
    let mut table = styled_table(&["Campo", "Estado", "Mensaje"]);
    for (field, entries) in states {
        if entries.is_empty() {
            table.add_row(vec![Cell::new(field.label()), dim_cell("-"), dim_cell("")]);
            continue;
        }
        for (idx, state) in entries.iter().enumerate() {
            let label = if field.is_list() {
                format!("{} #{}", field.label(), idx + 1)
            } else {
                field.label().to_string()
            };
            table.add_row(vec![
                Cell::new(label),
                state_cell(state),
                Cell::new(state.message()),
            ]);
        }
    }
    println!("{table}");
}

pub fn print_event_rows(rows: &[EventRow], page: u64, page_count: u64, count: u64) {
    let mut table = styled_table(&[
        "Inicio", "Término", "Comuna", "Sector", "Comida", "Nombre", "Foto",
    ]);
    for row in rows {
        table.add_row(vec![
            Cell::new(&row.start_date),
            Cell::new(&row.end_date),
            Cell::new(&row.comuna),
            Cell::new(&row.sector),
            Cell::new(format!("{}: {}", row.food_type, row.description)),
            Cell::new(&row.name),
            optional_cell(row.image_url.as_deref()),
        ]);
    }
    println!("{table}");
    println!("Página {page} de {page_count} ({count} eventos)");
}

pub fn print_portrait_rows(rows: &[PortraitRow]) {
    let mut table = styled_table(&["Inicio", "Término", "Comuna", "Sector", "Comida", "Foto"]);
    for row in rows {
        table.add_row(vec![
            Cell::new(&row.start_date),
            Cell::new(&row.end_date),
            Cell::new(&row.comuna),
            Cell::new(&row.sector),
            Cell::new(&row.food_type),
            optional_cell(row.image_url.as_deref()),
        ]);
    }
    println!("{table}");
}

pub fn print_event_detail(detail: &EventDetail) {
    let mut table = styled_table(&["Campo", "Valor"]);
    let fields = [
        ("Región", detail.region.as_str()),
        ("Comuna", detail.comuna.as_str()),
        ("Sector", detail.sector.as_str()),
        ("Nombre", detail.name.as_str()),
        ("Email", detail.email.as_str()),
        ("Celular", detail.phone.as_str()),
        ("Inicio", detail.start_date.as_str()),
        ("Término", detail.end_date.as_str()),
        ("Descripción", detail.description.as_str()),
        ("Tipo de comida", detail.food_type.as_str()),
    ];
    for (label, value) in fields {
        table.add_row(vec![header_cell(label), optional_cell(Some(value))]);
    }
    for link in &detail.social_links {
        table.add_row(vec![header_cell(&link.label), Cell::new(&link.url)]);
    }
    for (idx, url) in detail.image_urls.iter().enumerate() {
        table.add_row(vec![header_cell(&format!("Foto {}", idx + 1)), Cell::new(url)]);
    }
    println!("{table}");
}

pub fn print_dashboard(dashboard: &Dashboard) {
    let per_day = &dashboard.per_day;
    println!("{}", per_day.title);
    let mut table = styled_table(&["Día", "Eventos"]);
    for (day, count) in per_day.categories.iter().zip(&per_day.series.data) {
        table.add_row(vec![Cell::new(day), Cell::new(count)]);
    }
    align_column(&mut table, 1, CellAlignment::Right);
    println!("{table}");

    let per_food_type = &dashboard.per_food_type;
    println!("{}", per_food_type.title);
    let mut table = styled_table(&[per_food_type.series.name.as_str(), "Eventos"]);
    for point in &per_food_type.series.data {
        table.add_row(vec![Cell::new(&point.name), Cell::new(point.y)]);
    }
    align_column(&mut table, 1, CellAlignment::Right);
    println!("{table}");

    let per_month = &dashboard.per_month;
    println!("{}", per_month.title);
    let mut headers = vec!["Mes"];
    headers.extend(per_month.series.iter().map(|series| series.name.as_str()));
    let mut table = styled_table(&headers);
    for (idx, month) in per_month.categories.iter().enumerate() {
        let mut row = vec![Cell::new(month)];
        row.extend(
            per_month
                .series
                .iter()
                .map(|series| Cell::new(series.data.get(idx).copied().unwrap_or_default())),
        );
        table.add_row(row);
    }
    for column in 1..=per_month.series.len() {
        align_column(&mut table, column, CellAlignment::Right);
    }
    println!("{table}");
}

pub fn print_map(view: &MapView) {
    let (lat, lng) = view.center;
    println!("Centro ({lat}, {lng}), zoom {}", view.zoom);
    let mut table = styled_table(&["Comuna", "Latitud", "Longitud", "Imágenes"]);
    for marker in &view.markers {
        table.add_row(vec![
            Cell::new(&marker.comuna),
            Cell::new(marker.lat),
            Cell::new(marker.lng),
            Cell::new(marker.image_count),
        ]);
    }
    for column in 1..=3 {
        align_column(&mut table, column, CellAlignment::Right);
    }
    println!("{table}");
}
