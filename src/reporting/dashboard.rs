use serde::Serialize;
use std::fs;
use std::io;
use std::path::Path;

use crate::dataset::aggregate::Crosstab;
use crate::dataset::filter::FilterSet;
use crate::gallery::GallerySlot;
use crate::ui::output::DisplayMetadata;

/// Constants for dashboard styling and layout
mod dashboard_constants {
    /// Chart.js CDN URL for rendering charts
    pub const CHART_JS_CDN: &str = "https://cdn.jsdelivr.net/npm/chart.js";

    /// Smallest tag-cloud font size in rem
    pub const MIN_CLOUD_REM: f64 = 0.9;
    /// Largest tag-cloud font size in rem
    pub const MAX_CLOUD_REM: f64 = 2.6;
}

/// Data structure containing all information needed for dashboard generation
#[derive(Debug, Clone)]
pub struct DashboardData {
    /// Record counts and distinct-value statistics
    pub metadata: DisplayMetadata,
    /// Filters that produced the charted view
    pub filters: FilterSet,
    /// Per-event counts, descending
    pub event_counts: Vec<(String, usize)>,
    /// Per-day counts, day order
    pub day_counts: Vec<(u8, usize)>,
    /// Per-college counts, descending
    pub college_counts: Vec<(String, usize)>,
    /// Per-state counts, descending
    pub state_counts: Vec<(String, usize)>,
    /// Word frequencies over the filtered feedback text
    pub word_frequencies: Vec<(String, usize)>,
    /// Event x feedback crosstab over the full collection
    pub crosstab: Crosstab,
    /// Day whose gallery is shown
    pub gallery_day: u8,
    /// Resolved gallery slots for that day
    pub gallery_slots: Vec<GallerySlot>,
    /// Timestamp when the dashboard was generated
    pub timestamp: String,
}

/// Error type for dashboard generation
#[derive(Debug)]
pub enum DashboardError {
    FileWrite(io::Error),
    Serialization(String),
}

impl std::fmt::Display for DashboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DashboardError::FileWrite(e) => write!(f, "Failed to write dashboard file: {}", e),
            DashboardError::Serialization(e) => write!(f, "Failed to serialize data: {}", e),
        }
    }
}

impl std::error::Error for DashboardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DashboardError::FileWrite(e) => Some(e),
            DashboardError::Serialization(_) => None,
        }
    }
}

impl From<io::Error> for DashboardError {
    fn from(e: io::Error) -> Self {
        DashboardError::FileWrite(e)
    }
}

#[derive(Serialize)]
struct BarChartPayload {
    labels: Vec<String>,
    values: Vec<usize>,
}

#[derive(Serialize)]
struct CrosstabDataset {
    label: String,
    data: Vec<usize>,
}

#[derive(Serialize)]
struct CrosstabPayload {
    labels: Vec<String>,
    datasets: Vec<CrosstabDataset>,
}

/// HTML dashboard generator for festival participation analysis
pub struct HtmlDashboard;

impl HtmlDashboard {
    /// Generate and write an HTML dashboard to the specified path
    pub fn generate_dashboard(
        data: &DashboardData,
        output_path: &Path,
    ) -> Result<(), DashboardError> {
        let html_content = Self::generate_html_content(data)?;
        fs::write(output_path, html_content)?;
        Ok(())
    }

    /// Generate the complete HTML document content
    pub fn generate_html_content(data: &DashboardData) -> Result<String, DashboardError> {
        let css_styles = Self::generate_css();
        let js_scripts = Self::generate_javascript();
        let body_content = Self::generate_body_content(data)?;

        Ok(format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>INBLOOM '25 - Participation Analysis Dashboard</title>
    <script src="{}"></script>
    <style>{}</style>
</head>
<body>
    {}
    <script>{}</script>
</body>
</html>"#,
            dashboard_constants::CHART_JS_CDN,
            css_styles,
            body_content,
            js_scripts
        ))
    }

    fn generate_css() -> &'static str {
        r#"
        :root {
            --primary-color: #2563eb;
            --success-color: #059669;
            --warning-color: #d97706;
            --error-color: #dc2626;
            --bg-color: #f8fafc;
            --card-bg: #ffffff;
            --border-color: #e2e8f0;
            --text-primary: #1e293b;
            --text-secondary: #64748b;
        }

        * { margin: 0; padding: 0; box-sizing: border-box; }

        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            background-color: var(--bg-color);
            color: var(--text-primary);
            line-height: 1.6;
        }

        .container {
            max-width: 1200px;
            margin: 0 auto;
            padding: 2rem;
        }

        .header {
            text-align: center;
            margin-bottom: 3rem;
            padding: 2rem;
            background: linear-gradient(135deg, var(--primary-color), #3b82f6);
            color: white;
            border-radius: 12px;
            box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
        }

        .header h1 {
            font-size: 2.5rem;
            margin-bottom: 0.5rem;
            font-weight: 700;
        }

        .header p {
            font-size: 1.1rem;
            opacity: 0.9;
        }

        .stats-grid {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(250px, 1fr));
            gap: 1.5rem;
            margin-bottom: 3rem;
        }

        .stat-card {
            background: var(--card-bg);
            padding: 1.5rem;
            border-radius: 12px;
            border: 1px solid var(--border-color);
            box-shadow: 0 2px 4px -1px rgba(0, 0, 0, 0.06);
        }

        .stat-icon {
            width: 48px;
            height: 48px;
            border-radius: 12px;
            display: flex;
            align-items: center;
            justify-content: center;
            margin-bottom: 1rem;
            font-size: 1.5rem;
        }

        .stat-value {
            font-size: 2rem;
            font-weight: 700;
            margin-bottom: 0.5rem;
        }

        .stat-label {
            color: var(--text-secondary);
            font-size: 0.9rem;
            text-transform: uppercase;
            letter-spacing: 0.5px;
        }

        .success { color: var(--success-color); background-color: #ecfdf5; }
        .warning { color: var(--warning-color); background-color: #fffbeb; }
        .error { color: var(--error-color); background-color: #fef2f2; }
        .info { color: var(--primary-color); background-color: #eff6ff; }

        .chart-container {
            background: var(--card-bg);
            padding: 2rem;
            border-radius: 12px;
            border: 1px solid var(--border-color);
            margin-bottom: 2rem;
            box-shadow: 0 2px 4px -1px rgba(0, 0, 0, 0.06);
        }

        .chart-title {
            font-size: 1.25rem;
            font-weight: 600;
            margin-bottom: 1rem;
            color: var(--text-primary);
        }

        .word-cloud {
            display: flex;
            flex-wrap: wrap;
            align-items: baseline;
            justify-content: center;
            gap: 0.6rem 1rem;
            padding: 1rem;
        }

        .word-cloud span {
            color: var(--primary-color);
            font-weight: 600;
        }

        .gallery-grid {
            display: grid;
            grid-template-columns: repeat(3, 1fr);
            gap: 1rem;
        }

        .gallery-slot img {
            width: 100%;
            border-radius: 8px;
            border: 1px solid var(--border-color);
        }

        .gallery-slot .caption {
            text-align: center;
            color: var(--text-secondary);
            font-size: 0.875rem;
            margin-top: 0.25rem;
        }

        .gallery-warning {
            border: 1px dashed var(--warning-color);
            border-radius: 8px;
            color: var(--warning-color);
            background-color: #fffbeb;
            display: flex;
            align-items: center;
            justify-content: center;
            min-height: 120px;
            padding: 1rem;
            text-align: center;
        }

        @media (max-width: 768px) {
            .container { padding: 1rem; }
            .header h1 { font-size: 2rem; }
            .stats-grid { grid-template-columns: 1fr; }
            .chart-container { padding: 1rem; }
            .gallery-grid { grid-template-columns: 1fr; }
        }
        "#
    }

    /// Generate the main body content of the dashboard
    fn generate_body_content(data: &DashboardData) -> Result<String, DashboardError> {
        let header_section = Self::generate_header_section(&data.timestamp, &data.filters);
        let stats_section = Self::generate_stats_section(data);
        let charts_section = Self::generate_charts_section(data)?;
        let wordcloud_section = Self::generate_wordcloud_section(data);
        let gallery_section = Self::generate_gallery_section(data);

        Ok(format!(
            r#"
            <div class="container">
                {}
                {}
                {}
                {}
                {}
            </div>
            "#,
            header_section, stats_section, charts_section, wordcloud_section, gallery_section
        ))
    }

    /// Generate the dashboard header section
    fn generate_header_section(timestamp: &str, filters: &FilterSet) -> String {
        let filter_line = if filters.is_empty() {
            "Showing all participants".to_string()
        } else {
            let mut parts = Vec::new();
            if let Some(ref event) = filters.event {
                parts.push(format!("event: {event}"));
            }
            if let Some(ref college) = filters.college {
                parts.push(format!("college: {college}"));
            }
            if let Some(ref state) = filters.state {
                parts.push(format!("state: {state}"));
            }
            format!("Filtered by {}", parts.join(", "))
        };

        format!(
            r#"
            <div class="header">
                <h1>🎪 INBLOOM '25 Participation Dashboard</h1>
                <p>{} • Generated on {} by festdash</p>
            </div>
            "#,
            filter_line, timestamp
        )
    }

    /// Generate the statistics cards section
    fn generate_stats_section(data: &DashboardData) -> String {
        let metadata = &data.metadata;
        let filtered_style = if metadata.filtered_records == 0 {
            "warning"
        } else {
            "success"
        };

        format!(
            r#"
            <div class="stats-grid">
                {}
                {}
                {}
                {}
            </div>
            "#,
            Self::generate_stat_card(
                "🎪",
                &metadata.total_records.to_string(),
                "Total Participants",
                "info"
            ),
            Self::generate_stat_card(
                "🔎",
                &metadata.filtered_records.to_string(),
                "Matching Filters",
                filtered_style
            ),
            Self::generate_stat_card(
                "🏆",
                &metadata.distinct_events.to_string(),
                "Events Represented",
                "info"
            ),
            Self::generate_stat_card(
                "🎓",
                &metadata.distinct_colleges.to_string(),
                "Colleges Represented",
                "info"
            ),
        )
    }

    /// Generate a single statistics card
    fn generate_stat_card(icon: &str, value: &str, label: &str, style_class: &str) -> String {
        format!(
            r#"
            <div class="stat-card">
                <div class="stat-icon {}">{}</div>
                <div class="stat-value">{}</div>
                <div class="stat-label">{}</div>
            </div>
            "#,
            style_class, icon, value, label
        )
    }

    /// Generate the charts section: four bar charts over the filtered view
    /// plus the stacked event x feedback chart over the full collection.
    fn generate_charts_section(data: &DashboardData) -> Result<String, DashboardError> {
        let event_payload = Self::bar_payload(&data.event_counts);
        let day_payload = BarChartPayload {
            labels: data
                .day_counts
                .iter()
                .map(|(day, _)| format!("Day {day}"))
                .collect(),
            values: data.day_counts.iter().map(|(_, count)| *count).collect(),
        };
        let college_payload = Self::bar_payload(&data.college_counts);
        let state_payload = Self::bar_payload(&data.state_counts);
        let crosstab_payload = Self::crosstab_payload(&data.crosstab);

        let chart_data = serde_json::json!({
            "event": event_payload,
            "day": day_payload,
            "college": college_payload,
            "state": state_payload,
            "crosstab": crosstab_payload,
        });
        let chart_data_json = serde_json::to_string(&chart_data)
            .map_err(|e| DashboardError::Serialization(e.to_string()))?;

        Ok(format!(
            r#"
            <div class="chart-container">
                <h3 class="chart-title">📊 Event-wise Participation</h3>
                <canvas id="eventChart" width="400" height="200"></canvas>
            </div>
            <div class="chart-container">
                <h3 class="chart-title">📅 Day-wise Participation</h3>
                <canvas id="dayChart" width="400" height="200"></canvas>
            </div>
            <div class="chart-container">
                <h3 class="chart-title">🎓 College-wise Participation</h3>
                <canvas id="collegeChart" width="400" height="200"></canvas>
            </div>
            <div class="chart-container">
                <h3 class="chart-title">🗺️ State-wise Participation</h3>
                <canvas id="stateChart" width="400" height="200"></canvas>
            </div>
            <div class="chart-container">
                <h3 class="chart-title">💬 Feedback Distribution for Each Event (all participants)</h3>
                <canvas id="crosstabChart" width="400" height="260"></canvas>
            </div>

            <script>
                window.chartData = {};
            </script>
            "#,
            chart_data_json
        ))
    }

    fn bar_payload(counts: &[(String, usize)]) -> BarChartPayload {
        BarChartPayload {
            labels: counts.iter().map(|(label, _)| label.clone()).collect(),
            values: counts.iter().map(|(_, count)| *count).collect(),
        }
    }

    fn crosstab_payload(crosstab: &Crosstab) -> CrosstabPayload {
        let datasets = crosstab
            .feedbacks
            .iter()
            .enumerate()
            .map(|(col, feedback)| CrosstabDataset {
                label: feedback.clone(),
                data: crosstab.counts.iter().map(|row| row[col]).collect(),
            })
            .collect();

        CrosstabPayload {
            labels: crosstab.events.clone(),
            datasets,
        }
    }

    /// Generate the word-cloud section: font size scales with frequency.
    fn generate_wordcloud_section(data: &DashboardData) -> String {
        if data.word_frequencies.is_empty() {
            return r#"
                <div class="chart-container">
                    <h3 class="chart-title">💬 Feedback Word Cloud</h3>
                    <p>No feedback matches the active filters.</p>
                </div>
                "#
            .to_string();
        }

        let max_count = data
            .word_frequencies
            .iter()
            .map(|(_, count)| *count)
            .max()
            .unwrap_or(1) as f64;

        let words_html = data
            .word_frequencies
            .iter()
            .map(|(word, count)| {
                let scale = *count as f64 / max_count;
                let rem = dashboard_constants::MIN_CLOUD_REM
                    + (dashboard_constants::MAX_CLOUD_REM - dashboard_constants::MIN_CLOUD_REM)
                        * scale;
                format!(
                    r#"<span style="font-size: {:.2}rem" title="{} occurrence(s)">{}</span>"#,
                    rem, count, word
                )
            })
            .collect::<Vec<_>>()
            .join("\n                    ");

        format!(
            r#"
            <div class="chart-container">
                <h3 class="chart-title">💬 Feedback Word Cloud</h3>
                <div class="word-cloud">
                    {}
                </div>
            </div>
            "#,
            words_html
        )
    }

    /// Generate the gallery section; missing slots render as visible warnings.
    fn generate_gallery_section(data: &DashboardData) -> String {
        let slots_html = data
            .gallery_slots
            .iter()
            .enumerate()
            .map(|(index, slot)| match slot {
                GallerySlot::Found(path) => format!(
                    r#"
                    <div class="gallery-slot">
                        <img src="{}" alt="Day {} - Image {}">
                        <div class="caption">Day {} - Image {}</div>
                    </div>
                    "#,
                    path.display(),
                    data.gallery_day,
                    index + 1,
                    data.gallery_day,
                    index + 1
                ),
                GallerySlot::Missing { warning, .. } => format!(
                    r#"
                    <div class="gallery-slot">
                        <div class="gallery-warning">⚠️ {}</div>
                    </div>
                    "#,
                    warning
                ),
            })
            .collect::<Vec<_>>()
            .join("");

        format!(
            r#"
            <div class="chart-container">
                <h3 class="chart-title">🖼️ Event Photos - Day {}</h3>
                <div class="gallery-grid">
                    {}
                </div>
            </div>
            "#,
            data.gallery_day, slots_html
        )
    }

    fn generate_javascript() -> &'static str {
        r#"
        document.addEventListener('DOMContentLoaded', function() {
            if (typeof Chart === 'undefined' || !window.chartData) {
                return;
            }

            const palette = [
                '#2563eb', '#059669', '#d97706', '#dc2626', '#7c3aed',
                '#0891b2', '#be185d', '#65a30d', '#475569', '#ea580c',
                '#0d9488', '#c026d3', '#ca8a04', '#4f46e5', '#b91c1c',
                '#15803d', '#a21caf', '#1d4ed8', '#92400e'
            ];

            function barChart(id, payload, color, horizontal) {
                const ctx = document.getElementById(id);
                if (!ctx) return;
                new Chart(ctx, {
                    type: 'bar',
                    data: {
                        labels: payload.labels,
                        datasets: [{
                            data: payload.values,
                            backgroundColor: color,
                            borderWidth: 0
                        }]
                    },
                    options: {
                        indexAxis: horizontal ? 'y' : 'x',
                        responsive: true,
                        plugins: { legend: { display: false } },
                        scales: {
                            x: { beginAtZero: true, ticks: { precision: 0 } },
                            y: { beginAtZero: true, ticks: { precision: 0 } }
                        }
                    }
                });
            }

            barChart('eventChart', window.chartData.event, '#2563eb', true);
            barChart('dayChart', window.chartData.day, '#059669', false);
            barChart('collegeChart', window.chartData.college, '#7c3aed', true);
            barChart('stateChart', window.chartData.state, '#d97706', true);

            const crosstabCtx = document.getElementById('crosstabChart');
            if (crosstabCtx) {
                const payload = window.chartData.crosstab;
                new Chart(crosstabCtx, {
                    type: 'bar',
                    data: {
                        labels: payload.labels,
                        datasets: payload.datasets.map(function(ds, i) {
                            return {
                                label: ds.label,
                                data: ds.data,
                                backgroundColor: palette[i % palette.length]
                            };
                        })
                    },
                    options: {
                        responsive: true,
                        plugins: {
                            legend: { position: 'bottom', labels: { font: { size: 10 } } }
                        },
                        scales: {
                            x: { stacked: true },
                            y: { stacked: true, beginAtZero: true, ticks: { precision: 0 } }
                        }
                    }
                });
            }
        });
        "#
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::aggregate::event_feedback_crosstab;
    use crate::dataset::generator;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    fn create_test_data() -> DashboardData {
        let records = generator::generate(Some(7));
        DashboardData {
            metadata: DisplayMetadata {
                total_records: 250,
                filtered_records: 3,
                distinct_events: 2,
                distinct_colleges: 2,
                distinct_states: 1,
            },
            filters: FilterSet::from_selections(Some("Chess"), None, None),
            event_counts: vec![("Chess".to_string(), 2), ("Quiz".to_string(), 1)],
            day_counts: vec![(1, 2), (2, 1), (3, 0), (4, 0), (5, 0)],
            college_counts: vec![
                ("IIT Bombay".to_string(), 2),
                ("BIT Mesra".to_string(), 1),
            ],
            state_counts: vec![("Maharashtra".to_string(), 3)],
            word_frequencies: vec![
                ("loved".to_string(), 2),
                ("it".to_string(), 2),
                ("awesome".to_string(), 1),
            ],
            crosstab: event_feedback_crosstab(&records),
            gallery_day: 2,
            gallery_slots: vec![
                GallerySlot::Found(PathBuf::from("img1.jpg")),
                GallerySlot::Missing {
                    file_name: "img3.jpg".to_string(),
                    warning: "Image img3.jpg not found.".to_string(),
                },
            ],
            timestamp: "2025-03-01 10:00:00 UTC".to_string(),
        }
    }

    #[test]
    fn test_generate_html_content_structure() {
        let data = create_test_data();
        let html = HtmlDashboard::generate_html_content(&data).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("INBLOOM '25"));
        assert!(html.contains(dashboard_constants::CHART_JS_CDN));
        for canvas in [
            "eventChart",
            "dayChart",
            "collegeChart",
            "stateChart",
            "crosstabChart",
        ] {
            assert!(html.contains(canvas), "missing canvas {canvas}");
        }
    }

    #[test]
    fn test_chart_data_embedded_as_json() {
        let data = create_test_data();
        let html = HtmlDashboard::generate_html_content(&data).unwrap();

        assert!(html.contains(r#""labels":["Chess","Quiz"]"#));
        assert!(html.contains(r#""values":[2,1]"#));
        assert!(html.contains("Day 1"));
    }

    #[test]
    fn test_header_reflects_filters() {
        let data = create_test_data();
        let html = HtmlDashboard::generate_html_content(&data).unwrap();
        assert!(html.contains("Filtered by event: Chess"));

        let mut unfiltered = create_test_data();
        unfiltered.filters = FilterSet::default();
        let html = HtmlDashboard::generate_html_content(&unfiltered).unwrap();
        assert!(html.contains("Showing all participants"));
    }

    #[test]
    fn test_gallery_missing_slot_renders_warning() {
        let data = create_test_data();
        let html = HtmlDashboard::generate_html_content(&data).unwrap();

        assert!(html.contains("Image img3.jpg not found."));
        assert!(html.contains(r#"<img src="img1.jpg""#));
        assert!(html.contains("Event Photos - Day 2"));
    }

    #[test]
    fn test_word_cloud_scales_with_frequency() {
        let data = create_test_data();
        let html = HtmlDashboard::generate_html_content(&data).unwrap();

        // Max count gets the max size, singletons stay smaller.
        assert!(html.contains("font-size: 2.60rem"));
        assert!(html.contains(">loved</span>"));
    }

    #[test]
    fn test_word_cloud_empty_view() {
        let mut data = create_test_data();
        data.word_frequencies.clear();
        let html = HtmlDashboard::generate_html_content(&data).unwrap();
        assert!(html.contains("No feedback matches the active filters."));
    }

    #[test]
    fn test_generate_dashboard_writes_file() {
        let data = create_test_data();
        let file = NamedTempFile::new().unwrap();

        HtmlDashboard::generate_dashboard(&data, file.path()).unwrap();

        let written = std::fs::read_to_string(file.path()).unwrap();
        assert!(written.contains("INBLOOM '25"));
    }

    #[test]
    fn test_generate_dashboard_invalid_path() {
        let data = create_test_data();
        let result =
            HtmlDashboard::generate_dashboard(&data, Path::new("/nonexistent/dir/out.html"));
        assert!(matches!(result, Err(DashboardError::FileWrite(_))));
    }

    #[test]
    fn test_dashboard_error_display() {
        let err = DashboardError::Serialization("bad payload".to_string());
        assert_eq!(err.to_string(), "Failed to serialize data: bad payload");

        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err = DashboardError::from(io_err);
        assert!(err.to_string().contains("Failed to write dashboard file"));
    }
}
