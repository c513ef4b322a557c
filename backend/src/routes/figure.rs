use serde::{Deserialize, Serialize};

/// Line style of a 3-D trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub width: f64,
    pub color: String,
}

/// Font used for per-point labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextFont {
    pub size: u32,
    pub color: String,
}

/// A plotly `scatter3d` trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scatter3dTrace {
    #[serde(rename = "type")]
    pub trace_type: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
    pub mode: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub text: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub textposition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub textfont: Option<TextFont>,
    pub line: LineStyle,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub hoverinfo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub name: Option<String>,
}

impl Scatter3dTrace {
    /// Plain polyline through the given points.
    pub fn lines(x: Vec<f64>, y: Vec<f64>, z: Vec<f64>, line: LineStyle) -> Self {
        Self {
            trace_type: "scatter3d".to_string(),
            x,
            y,
            z,
            mode: "lines".to_string(),
            text: None,
            textposition: None,
            textfont: None,
            line,
            opacity: None,
            hoverinfo: None,
            name: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisStyle {
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneLayout {
    pub xaxis: AxisStyle,
    pub yaxis: AxisStyle,
    pub zaxis: AxisStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub t: u32,
    pub b: u32,
}

/// Figure layout: hidden axes, no legend, no margins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FigureLayout {
    pub showlegend: bool,
    pub scene: SceneLayout,
    pub margin: Margin,
}

impl Default for FigureLayout {
    fn default() -> Self {
        let hidden = || AxisStyle { visible: false };
        Self {
            showlegend: false,
            scene: SceneLayout {
                xaxis: hidden(),
                yaxis: hidden(),
                zaxis: hidden(),
            },
            margin: Margin { l: 0, r: 0, t: 0, b: 0 },
        }
    }
}

/// Figure in the shape `Plotly.react(el, figure.data, figure.layout)` expects.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Figure {
    pub data: Vec<Scatter3dTrace>,
    pub layout: FigureLayout,
}
