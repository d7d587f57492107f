//! Chart series for the statistics page.

use std::thread;

use foodshare_client::{EventApi, Result, join_scoped};
use foodshare_model::{DayCount, FoodTypeCount, MonthDaypartCounts};
use serde::Serialize;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Series {
    pub name: String,
    pub data: Vec<u64>,
}

/// Events per day, by start date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineChart {
    pub title: String,
    pub subtitle: String,
    pub y_axis: String,
    pub categories: Vec<String>,
    pub series: Series,
}

impl LineChart {
    pub fn from_counts(counts: &[DayCount]) -> Self {
        Self {
            title: "Cantidad de eventos por día".to_string(),
            subtitle: "Utilizando como referencia la fecha de inicio del evento.".to_string(),
            y_axis: "Cantidad de eventos".to_string(),
            categories: counts.iter().map(|DayCount(day, _)| day.clone()).collect(),
            series: Series {
                name: String::new(),
                data: counts.iter().map(|DayCount(_, n)| *n).collect(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PiePoint {
    pub name: String,
    pub y: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PieSeries {
    pub name: String,
    pub color_by_point: bool,
    pub data: Vec<PiePoint>,
}

/// Events per food type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PieChart {
    pub title: String,
    pub series: PieSeries,
}

impl PieChart {
    pub fn from_counts(counts: &[FoodTypeCount]) -> Self {
        Self {
            title: "Cantidad de eventos por tipo de comida.".to_string(),
            series: PieSeries {
                name: "Tipo de comida".to_string(),
                color_by_point: true,
                data: counts
                    .iter()
                    .map(|FoodTypeCount(name, y)| PiePoint {
                        name: name.clone(),
                        y: *y,
                    })
                    .collect(),
            },
        }
    }
}

/// Events per month, one column per time of day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnChart {
    pub title: String,
    pub subtitle: String,
    pub categories: Vec<String>,
    pub series: Vec<Series>,
}

impl ColumnChart {
    /// Series longer than `months` are truncated; shorter ones are padded
    /// with zeros.
    pub fn from_counts(counts: &MonthDaypartCounts) -> Self {
        let months = counts.months.len();
        let align = |name: &str, data: &[u64]| {
            if data.len() != months {
                warn!(series = name, len = data.len(), months, "series not aligned with months");
            }
            let mut data: Vec<u64> = data.iter().copied().take(months).collect();
            data.resize(months, 0);
            Series {
                name: name.to_string(),
                data,
            }
        };
        Self {
            title: "Cantidad de eventos por mes".to_string(),
            subtitle: "Agrupados por horario de inicio en: mañana, mediodía y tarde.".to_string(),
            categories: counts.months.clone(),
            series: vec![
                align("Mañana", &counts.early),
                align("Mediodía", &counts.midday),
                align("Tarde", &counts.evening),
            ],
        }
    }
}

/// The three charts of the statistics page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dashboard {
    pub per_day: LineChart,
    pub per_food_type: PieChart,
    pub per_month: ColumnChart,
}

/// Fetch the three aggregates together.
pub fn load_dashboard<A>(api: &A) -> Result<Dashboard>
where
    A: EventApi + ?Sized,
{
    let (per_day, per_food_type, per_month) = thread::scope(|scope| {
        let per_day = scope.spawn(|| api.events_per_day());
        let per_food_type = scope.spawn(|| api.events_per_food_type());
        let per_month = api.events_by_month_and_daypart();
        (
            join_scoped(per_day),
            join_scoped(per_food_type),
            per_month,
        )
    });
    Ok(Dashboard {
        per_day: LineChart::from_counts(&per_day?),
        per_food_type: PieChart::from_counts(&per_food_type?),
        per_month: ColumnChart::from_counts(&per_month?),
    })
}
