//! Shape collections described as data.
//!
//! ```toml
//! [[shapes]]
//! kind = "circle"
//! radius = 2.0
//!
//! [[shapes]]
//! kind = "square"
//! side = 1.5
//! ```
//!
//! JSON scenes only carry finite dimensions: `serde_json` writes NaN and
//! infinities as `null`, which does not load back.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::draw::draw_all_shapes_to;
use crate::error::SceneError;
use crate::shape::{Shape, Shapes};
use crate::shapes::{Circle, Square};

/// The collection the program draws: a circle, a square, another circle.
pub fn sample_shapes() -> Shapes {
    vec![
        Shape::from(Circle::new(2.0)),
        Shape::from(Square::new(1.5)),
        Shape::from(Circle::new(4.2)),
    ]
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub shapes: Shapes,
}

impl Scene {
    pub fn new(shapes: Shapes) -> Self {
        Scene { shapes }
    }

    pub fn sample() -> Self {
        Scene::new(sample_shapes())
    }

    pub fn from_toml_str(content: &str) -> Result<Self, SceneError> {
        let scene: Scene = toml::from_str(content)?;
        debug!(shapes = scene.shapes.len(), "parsed TOML scene");
        Ok(scene)
    }

    pub fn from_json_str(content: &str) -> Result<Self, SceneError> {
        let scene: Scene = serde_json::from_str(content)?;
        debug!(shapes = scene.shapes.len(), "parsed JSON scene");
        Ok(scene)
    }

    /// Loads a scene file. `.json` and `.toml` extensions pick the format;
    /// anything else is JSON if it opens with `{`, TOML otherwise.
    pub fn from_path(path: &Path) -> Result<Self, SceneError> {
        let content = fs::read_to_string(path).map_err(|err| SceneError::read(path, err))?;

        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match format.as_deref() {
            Some("json") => Self::from_json_str(&content),
            Some("toml") => Self::from_toml_str(&content),
            _ => {
                let trimmed = content.trim_start();
                if trimmed.starts_with('{') {
                    Self::from_json_str(&content)
                } else {
                    Self::from_toml_str(&content)
                }
            }
        }
    }

    pub fn draw_to<W: Write>(&self, out: &mut W) -> Result<(), SceneError> {
        draw_all_shapes_to(out, &self.shapes)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use tempfile::Builder;

    const SAMPLE_TOML: &str = r#"
[[shapes]]
kind = "circle"
radius = 2.0

[[shapes]]
kind = "square"
side = 1.5

[[shapes]]
kind = "circle"
radius = 4.2
"#;

    const SAMPLE_JSON: &str = r#"{
  "shapes": [
    { "kind": "circle", "radius": 2.0 },
    { "kind": "square", "side": 1.5 },
    { "kind": "circle", "radius": 4.2 }
  ]
}"#;

    #[test]
    fn test_sample_order() {
        let shapes = sample_shapes();
        assert_eq!(shapes.len(), 3);
        assert_eq!(shapes[0], Shape::Circle(Circle::new(2.0)));
        assert_eq!(shapes[1], Shape::Square(Square::new(1.5)));
        assert_eq!(shapes[2], Shape::Circle(Circle::new(4.2)));
    }

    #[test]
    fn test_parse_toml() {
        assert_eq!(Scene::from_toml_str(SAMPLE_TOML).unwrap(), Scene::sample());
    }

    #[test]
    fn test_parse_json() {
        assert_eq!(Scene::from_json_str(SAMPLE_JSON).unwrap(), Scene::sample());
    }

    #[test]
    fn test_empty_documents() {
        assert!(Scene::from_toml_str("").unwrap().shapes.is_empty());
        assert!(Scene::from_json_str("{}").unwrap().shapes.is_empty());
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let json = r#"{ "shapes": [ { "kind": "triangle", "side": 1.0 } ] }"#;
        assert!(matches!(
            Scene::from_json_str(json),
            Err(SceneError::Json(_))
        ));

        let toml = "[[shapes]]\nkind = \"triangle\"\nside = 1.0\n";
        assert!(matches!(Scene::from_toml_str(toml), Err(SceneError::Toml(_))));
    }

    #[test]
    fn test_missing_dimension_is_rejected() {
        let json = r#"{ "shapes": [ { "kind": "circle" } ] }"#;
        assert!(Scene::from_json_str(json).is_err());
    }

    #[test]
    fn test_json_round_trip_keeps_tag() {
        let json = serde_json::to_value(Scene::sample()).unwrap();
        assert_eq!(json["shapes"][1]["kind"], "square");
        assert_eq!(json["shapes"][1]["side"], 1.5);
    }

    #[test]
    fn test_from_path_by_extension() {
        let mut file = Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(SAMPLE_TOML.as_bytes()).unwrap();
        assert_eq!(Scene::from_path(file.path()).unwrap(), Scene::sample());

        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(SAMPLE_JSON.as_bytes()).unwrap();
        assert_eq!(Scene::from_path(file.path()).unwrap(), Scene::sample());
    }

    #[test]
    fn test_from_path_sniffs_format() {
        let mut file = Builder::new().suffix(".scene").tempfile().unwrap();
        file.write_all(SAMPLE_JSON.as_bytes()).unwrap();
        assert_eq!(Scene::from_path(file.path()).unwrap(), Scene::sample());

        let mut file = Builder::new().suffix(".scene").tempfile().unwrap();
        file.write_all(SAMPLE_TOML.as_bytes()).unwrap();
        assert_eq!(Scene::from_path(file.path()).unwrap(), Scene::sample());
    }

    #[test]
    fn test_from_path_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        assert!(matches!(
            Scene::from_path(&path),
            Err(SceneError::Read { .. })
        ));
    }

    #[test]
    fn test_draw_to() {
        let mut buf = Vec::new();
        Scene::sample().draw_to(&mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "This is supposed to draw a circle...\n\
             This is supposed to draw a square...\n\
             This is supposed to draw a circle...\n"
        );
    }

    #[test]
    fn test_draw_to_wraps_write_errors() {
        struct Broken;

        impl Write for Broken {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let err = Scene::sample().draw_to(&mut Broken).unwrap_err();
        assert!(matches!(err, SceneError::Io(ref e) if e.kind() == io::ErrorKind::BrokenPipe));
    }

    #[test]
    fn test_json_drops_non_finite_dimensions() {
        let scene = Scene::new(vec![Shape::from(Circle::new(f64::NAN))]);
        let json = serde_json::to_string(&scene).unwrap();
        assert!(json.contains("null"));
        assert!(matches!(
            Scene::from_json_str(&json),
            Err(SceneError::Json(_))
        ));
    }
}
