use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

/// Solid-color surface attributes, channels in [0, 1]. Shininess is passed
/// through to the viewer unconstrained.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialSpec {
    pub diffuse_color: [f64; 3],
    pub specular_color: [f64; 3],
    pub shininess: f64,
    pub transparency: f64,
}

impl Default for MaterialSpec {
    fn default() -> Self {
        Self {
            diffuse_color: [0.65, 0.65, 0.65],
            specular_color: [1.0, 1.0, 1.0],
            shininess: 0.9,
            transparency: 0.0,
        }
    }
}

impl MaterialSpec {
    pub fn validate(&self) -> Result<()> {
        for (name, channels) in [
            ("diffuse color", &self.diffuse_color),
            ("specular color", &self.specular_color),
        ] {
            for channel in channels {
                if !(0.0..=1.0).contains(channel) {
                    bail!("{name} channel {channel} outside [0, 1]");
                }
            }
        }
        if !(0.0..=1.0).contains(&self.transparency) {
            bail!("transparency {} outside [0, 1]", self.transparency);
        }
        Ok(())
    }
}

/// A custom shader program pair, embedded verbatim (modulo XML escaping).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShaderPair {
    pub vertex_source: String,
    pub fragment_source: String,
}

/// Surface appearance of one shape. Exactly one form applies: a supplied
/// shader pair overrides the material form entirely.
#[derive(Clone, Debug, PartialEq)]
pub enum Appearance {
    Material(MaterialSpec),
    Shader(ShaderPair),
}

impl Appearance {
    /// Resolve the appearance from its optional parts. Partial shader pairs
    /// and fully absent input are rejected here, before any markup exists.
    pub fn from_parts(
        material: Option<&MaterialSpec>,
        vertex_shader: Option<&str>,
        fragment_shader: Option<&str>,
    ) -> Result<Self> {
        match (vertex_shader, fragment_shader) {
            (Some(vs), Some(fs)) => Ok(Self::Shader(ShaderPair {
                vertex_source: vs.to_string(),
                fragment_source: fs.to_string(),
            })),
            (Some(_), None) => bail!("vertex shader supplied without a fragment shader"),
            (None, Some(_)) => bail!("fragment shader supplied without a vertex shader"),
            (None, None) => match material {
                Some(material) => {
                    material.validate()?;
                    Ok(Self::Material(material.clone()))
                }
                None => bail!("appearance requires a material or a shader pair"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shader_pair_overrides_material() -> Result<()> {
        let material = MaterialSpec::default();
        let appearance = Appearance::from_parts(Some(&material), Some("void vs"), Some("void fs"))?;
        match appearance {
            Appearance::Shader(pair) => {
                assert_eq!(pair.vertex_source, "void vs");
                assert_eq!(pair.fragment_source, "void fs");
            }
            Appearance::Material(_) => panic!("shader pair must win over the material form"),
        }
        Ok(())
    }

    #[test]
    fn partial_shader_pair_is_rejected() {
        let material = MaterialSpec::default();
        assert!(Appearance::from_parts(Some(&material), Some("void vs"), None).is_err());
        assert!(Appearance::from_parts(Some(&material), None, Some("void fs")).is_err());
    }

    #[test]
    fn fully_absent_appearance_is_rejected() {
        assert!(Appearance::from_parts(None, None, None).is_err());
    }

    #[test]
    fn out_of_range_channel_is_rejected() {
        let material = MaterialSpec {
            diffuse_color: [1.2, 0.0, 0.0],
            ..MaterialSpec::default()
        };
        assert!(Appearance::from_parts(Some(&material), None, None).is_err());

        let material = MaterialSpec {
            transparency: -0.1,
            ..MaterialSpec::default()
        };
        assert!(material.validate().is_err());
    }

    #[test]
    fn shininess_is_unconstrained() {
        let material = MaterialSpec {
            shininess: 128.0,
            ..MaterialSpec::default()
        };
        assert!(material.validate().is_ok());
    }
}
