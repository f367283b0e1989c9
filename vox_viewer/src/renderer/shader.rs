/// Shader program descriptor and the default voxel shader pair.
///
/// The sources are the original tool's fixed-function pair: an MVP
/// vertex shader and a flat-color fragment shader, GLSL 330 core.

/// Default voxel vertex shader (MVP transform, position only)
pub const VOXEL_VERTEX_SHADER: &str = "\
#version 330 core
layout (location = 0) in vec3 aPos;
uniform mat4 model;
uniform mat4 view;
uniform mat4 projection;
void main()
{
    gl_Position = projection * view * model * vec4(aPos, 1.0f);
}
";

/// Default voxel fragment shader (flat RGBA tint)
pub const VOXEL_FRAGMENT_SHADER: &str = "\
#version 330 core
out vec4 FragColor;
uniform vec4 voxel_color;
void main()
{
    FragColor = voxel_color;
}
";

/// Shader program descriptor
#[derive(Debug, Clone)]
pub struct ShaderProgramDesc {
    /// Program name (for diagnostics)
    pub name: String,
    /// Vertex shader source
    pub vertex_source: String,
    /// Fragment shader source
    pub fragment_source: String,
}

impl ShaderProgramDesc {
    /// The default voxel program used by the Viewer
    pub fn voxel_default() -> Self {
        Self {
            name: "voxel".to_string(),
            vertex_source: VOXEL_VERTEX_SHADER.to_string(),
            fragment_source: VOXEL_FRAGMENT_SHADER.to_string(),
        }
    }
}
