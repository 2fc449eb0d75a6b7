//! Declarative X3D scene tree and its XML writer.
//!
//! Exporters build a `Vec<SceneNode>` describing what to draw and hand it
//! to [`write_document`], which owns every formatting decision (indentation,
//! decimal places, attribute order, comment escaping).

use std::fmt::{self, Write};

use glam::DVec3;

use super::Fixed;
use crate::util::vector::AxisAngle;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
const DOCTYPE: &str = r#"<!DOCTYPE X3D PUBLIC "ISO//Web3D//DTD X3D 3.0//EN" "http://www.web3d.org/specifications/x3d-3.0.dtd">"#;
const X3D_OPEN: &str = r#"<X3D profile="Immersive" version="3.0">"#;

/// Geometry leaf of a [`SceneNode::Shape`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    /// Sphere centered on the local origin.
    Sphere {
        /// Sphere radius.
        radius: f64,
    },
    /// Cylinder along the local Y axis, centered on the origin.
    Cylinder {
        /// Cylinder radius.
        radius: f64,
        /// Full length along Y.
        height: f64,
    },
}

/// X3D `Material` fields. Unset optional fields are omitted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Diffuse RGB.
    pub diffuse: [f32; 3],
    /// Specular RGB.
    pub specular: Option<[f32; 3]>,
    /// Shininess in `[0, 1]`.
    pub shininess: Option<f32>,
    /// Ambient intensity in `[0, 1]`.
    pub ambient_intensity: Option<f32>,
}

impl Material {
    /// Material with only a diffuse color.
    #[must_use]
    pub fn diffuse(color: [f32; 3]) -> Self {
        Self {
            diffuse: color,
            specular: None,
            shininess: None,
            ambient_intensity: None,
        }
    }
}

/// A node of the exported scene.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneNode {
    /// `<!-- … -->`
    Comment(String),
    /// Scene background color.
    Background {
        /// RGB sky color.
        sky_color: [f32; 3],
    },
    /// Translated (and optionally rotated) group of child nodes.
    Transform {
        /// Offset of the local origin.
        translation: DVec3,
        /// Rotation applied before the translation.
        rotation: Option<AxisAngle>,
        /// Nested nodes.
        children: Vec<SceneNode>,
    },
    /// A single primitive with its appearance.
    Shape {
        /// Geometry.
        primitive: Primitive,
        /// Appearance material.
        material: Material,
    },
}

impl SceneNode {
    /// Transform without rotation.
    #[must_use]
    pub fn translate(translation: DVec3, children: Vec<SceneNode>) -> Self {
        Self::Transform {
            translation,
            rotation: None,
            children,
        }
    }
}

/// Comment text safe to embed in `<!-- … -->`: runs of `-` collapse to one
/// and a trailing `-` is dropped.
#[must_use]
pub fn sanitize_comment(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c == '-' && out.ends_with('-') {
            continue;
        }
        out.push(c);
    }
    while out.ends_with('-') {
        let _ = out.pop();
    }
    out
}

struct Rgb([f32; 3]);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0.map(|c| Fixed::fixed3(f64::from(c)));
        write!(f, "{r} {g} {b}")
    }
}

struct Vec3(DVec3);

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            Fixed::fixed4(self.0.x),
            Fixed::fixed4(self.0.y),
            Fixed::fixed4(self.0.z)
        )
    }
}

/// Indentation-tracking XML emitter.
struct SceneWriter<'w, W: Write> {
    out: &'w mut W,
    depth: usize,
}

impl<'w, W: Write> SceneWriter<'w, W> {
    fn new(out: &'w mut W) -> Self {
        Self { out, depth: 0 }
    }

    fn line(&mut self, args: fmt::Arguments<'_>) -> fmt::Result {
        for _ in 0..self.depth {
            self.out.write_str("  ")?;
        }
        self.out.write_fmt(args)?;
        self.out.write_char('\n')
    }

    fn node(&mut self, node: &SceneNode) -> fmt::Result {
        match node {
            SceneNode::Comment(text) => {
                self.line(format_args!("<!-- {} -->", sanitize_comment(text)))
            }
            SceneNode::Background { sky_color } => self.line(format_args!(
                r#"<Background skyColor="{}"/>"#,
                Rgb(*sky_color)
            )),
            SceneNode::Transform {
                translation,
                rotation,
                children,
            } => {
                match rotation {
                    Some(r) => self.line(format_args!(
                        r#"<Transform translation="{}" rotation="{} {}">"#,
                        Vec3(*translation),
                        Vec3(r.axis),
                        Fixed::fixed4(r.angle)
                    ))?,
                    None => self.line(format_args!(
                        r#"<Transform translation="{}">"#,
                        Vec3(*translation)
                    ))?,
                }
                self.nested(children)?;
                self.line(format_args!("</Transform>"))
            }
            SceneNode::Shape {
                primitive,
                material,
            } => {
                self.line(format_args!("<Shape>"))?;
                self.depth += 1;
                self.primitive(primitive)?;
                self.appearance(material)?;
                self.depth -= 1;
                self.line(format_args!("</Shape>"))
            }
        }
    }

    fn nested(&mut self, nodes: &[SceneNode]) -> fmt::Result {
        self.depth += 1;
        for child in nodes {
            self.node(child)?;
        }
        self.depth -= 1;
        Ok(())
    }

    fn primitive(&mut self, primitive: &Primitive) -> fmt::Result {
        match *primitive {
            Primitive::Sphere { radius } => self.line(format_args!(
                r#"<Sphere radius="{}"/>"#,
                Fixed::fixed4(radius)
            )),
            Primitive::Cylinder { radius, height } => self.line(format_args!(
                r#"<Cylinder radius="{}" height="{}"/>"#,
                Fixed::fixed4(radius),
                Fixed::fixed4(height)
            )),
        }
    }

    fn appearance(&mut self, material: &Material) -> fmt::Result {
        let mut attrs = format!(r#"diffuseColor="{}""#, Rgb(material.diffuse));
        if let Some(specular) = material.specular {
            write!(attrs, r#" specularColor="{}""#, Rgb(specular))?;
        }
        if let Some(shininess) = material.shininess {
            write!(attrs, r#" shininess="{}""#, Fixed::fixed3(f64::from(shininess)))?;
        }
        if let Some(ambient) = material.ambient_intensity {
            write!(
                attrs,
                r#" ambientIntensity="{}""#,
                Fixed::fixed3(f64::from(ambient))
            )?;
        }

        self.line(format_args!("<Appearance>"))?;
        self.depth += 1;
        self.line(format_args!("<Material {attrs}/>"))?;
        self.depth -= 1;
        self.line(format_args!("</Appearance>"))
    }
}

/// Write a complete X3D 3.0 document whose `<Scene>` holds `nodes`.
pub fn write_document<W: Write>(out: &mut W, nodes: &[SceneNode]) -> fmt::Result {
    let mut writer = SceneWriter::new(out);
    writer.line(format_args!("{XML_DECLARATION}"))?;
    writer.line(format_args!("{DOCTYPE}"))?;
    writer.line(format_args!("{X3D_OPEN}"))?;
    writer.depth = 1;
    writer.line(format_args!("<Scene>"))?;
    writer.nested(nodes)?;
    writer.line(format_args!("</Scene>"))?;
    writer.depth = 0;
    writer.line(format_args!("</X3D>"))
}
