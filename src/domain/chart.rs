// Chart projection - line, bar and pie views over a store snapshot
use super::series::{ColumnKey, SeriesError, SeriesRow};
use serde::Serialize;
use std::str::FromStr;

pub const PALETTE: [&str; 6] = [
    "#00BC91", "#00A77F", "#14B8A6", "#06B6D4", "#4ADE80", "#FBBF24",
];

pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartMode {
    #[default]
    Line,
    Bar,
    Pie,
}

impl FromStr for ChartMode {
    type Err = SeriesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "line" => Ok(ChartMode::Line),
            "bar" => Ok(ChartMode::Bar),
            "pie" => Ok(ChartMode::Pie),
            other => Err(SeriesError::UnknownMode(other.to_string())),
        }
    }
}

/// One plotted field. `None` points are gaps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeriesView {
    pub key: ColumnKey,
    pub name: &'static str,
    pub color: &'static str,
    pub points: Vec<Option<u64>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slice {
    pub name: String,
    pub value: u64,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum ChartView {
    Line {
        categories: Vec<String>,
        series: Vec<SeriesView>,
    },
    Bar {
        categories: Vec<String>,
        series: Vec<SeriesView>,
    },
    Pie {
        slices: Vec<Slice>,
    },
}

impl ChartView {
    pub fn project(rows: &[SeriesRow], mode: ChartMode) -> Self {
        match mode {
            ChartMode::Line => ChartView::Line {
                categories: categories(rows),
                series: field_series(rows),
            },
            ChartMode::Bar => ChartView::Bar {
                categories: categories(rows),
                series: field_series(rows),
            },
            ChartMode::Pie => ChartView::Pie {
                slices: rows
                    .iter()
                    .enumerate()
                    .map(|(index, row)| Slice {
                        name: row.label.clone(),
                        value: row.created,
                        color: palette_color(index),
                    })
                    .collect(),
            },
        }
    }

    pub fn mode(&self) -> ChartMode {
        match self {
            ChartView::Line { .. } => ChartMode::Line,
            ChartView::Bar { .. } => ChartMode::Bar,
            ChartView::Pie { .. } => ChartMode::Pie,
        }
    }
}

fn categories(rows: &[SeriesRow]) -> Vec<String> {
    rows.iter().map(|row| row.label.clone()).collect()
}

/// Colour follows the field's fixed position, so dropping an untracked
/// field does not shift the colours of the others.
fn field_series(rows: &[SeriesRow]) -> Vec<SeriesView> {
    ColumnKey::NUMERIC
        .iter()
        .enumerate()
        .filter_map(|(position, &key)| {
            let points: Vec<Option<u64>> = rows.iter().map(|row| row.count(key)).collect();
            if points.iter().all(Option::is_none) {
                return None;
            }
            Some(SeriesView {
                key,
                name: key.header(),
                color: palette_color(position),
                points,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::series::demo_rows;

    fn two_months() -> Vec<SeriesRow> {
        vec![
            SeriesRow::new("Jan", 32, None, None),
            SeriesRow::new("Feb", 45, None, None),
        ]
    }

    #[test]
    fn test_pie_slices_follow_rows() {
        let view = ChartView::project(&two_months(), ChartMode::Pie);
        let ChartView::Pie { slices } = view else {
            panic!("expected pie view");
        };
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0], Slice { name: "Jan".into(), value: 32, color: PALETTE[0] });
        assert_eq!(slices[1], Slice { name: "Feb".into(), value: 45, color: PALETTE[1] });
    }

    #[test]
    fn test_line_skips_untracked_fields() {
        let view = ChartView::project(&two_months(), ChartMode::Line);
        let ChartView::Line { categories, series } = view else {
            panic!("expected line view");
        };
        assert_eq!(categories, vec!["Jan", "Feb"]);
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].key, ColumnKey::Created);
        assert_eq!(series[0].points, vec![Some(32), Some(45)]);
        assert_eq!(series[0].color, PALETTE[0]);
    }

    #[test]
    fn test_bar_keeps_field_colours_and_gaps() {
        let rows = vec![
            SeriesRow::new("Jan", 32, None, Some(10)),
            SeriesRow::new("Feb", 45, None, None),
        ];
        let view = ChartView::project(&rows, ChartMode::Bar);
        assert_eq!(view.mode(), ChartMode::Bar);
        let ChartView::Bar { series, .. } = view else {
            panic!("expected bar view");
        };
        assert_eq!(series.len(), 2);
        assert_eq!(series[1].key, ColumnKey::ActiveUsers);
        assert_eq!(series[1].color, PALETTE[2]);
        assert_eq!(series[1].points, vec![Some(10), None]);
    }

    #[test]
    fn test_pie_palette_cycles() {
        let mut rows = demo_rows();
        rows.push(SeriesRow::new("Jul", 5, None, None));
        let ChartView::Pie { slices } = ChartView::project(&rows, ChartMode::Pie) else {
            panic!("expected pie view");
        };
        assert_eq!(slices.len(), 7);
        assert_eq!(slices[6].color, PALETTE[0]);
        assert_eq!(slices[5].color, PALETTE[5]);
    }

    #[test]
    fn test_projection_of_empty_store() {
        assert_eq!(
            ChartView::project(&[], ChartMode::Line),
            ChartView::Line { categories: vec![], series: vec![] }
        );
        assert_eq!(ChartView::project(&[], ChartMode::Pie), ChartView::Pie { slices: vec![] });
    }

    #[test]
    fn test_mode_parsing_and_json() {
        assert_eq!("bar".parse::<ChartMode>().unwrap(), ChartMode::Bar);
        assert!(matches!("donut".parse::<ChartMode>(), Err(SeriesError::UnknownMode(_))));

        let json = serde_json::to_value(ChartView::project(&two_months(), ChartMode::Pie)).unwrap();
        assert_eq!(json["mode"], "pie");
        assert_eq!(json["slices"][1]["value"], 45);
    }
}
