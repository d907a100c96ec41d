//! Checklist writer
//!
//! Creates new `.conform.toml` files from built-in templates.

use std::fs;
use std::path::Path;

/// Built-in checklist templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Template {
    /// Commented skeleton with a single example
    #[default]
    Blank,
    /// Smoke test for the 3D instances editor (gizmo, free camera, toolbar)
    Editor3d,
}

impl Template {
    /// Template content
    #[must_use]
    pub const fn content(self) -> &'static str {
        match self {
            Self::Blank => BLANK,
            Self::Editor3d => EDITOR_3D,
        }
    }
}

impl std::fmt::Display for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Blank => write!(f, "blank"),
            Self::Editor3d => write!(f, "editor3d"),
        }
    }
}

impl std::str::FromStr for Template {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "blank" => Ok(Self::Blank),
            "editor3d" => Ok(Self::Editor3d),
            _ => Err(format!("Invalid template: {s}. Use: blank, editor3d")),
        }
    }
}

/// Write `template` to `path`
///
/// Returns `false` without touching the file if it exists and `force` is unset.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_template(path: &Path, template: Template, force: bool) -> std::io::Result<bool> {
    if path.exists() && !force {
        return Ok(false);
    }
    fs::write(path, template.content())?;
    Ok(true)
}

const BLANK: &str = r#"# conform checklist
#
# Each [[expect]] is evaluated against files under base_dir.
# Kinds: file-exists, contains-all-substrings, contains-all-identifiers,
#        contains-all-substrings-folded, json-keys

[settings]
title = "Conformance checklist"
# base_dir = "."

# [[expect]]
# name = "Entry point exists"
# kind = "file-exists"
# target = "src/index.js"
#
# [[expect]]
# name = "Entry point exports"
# kind = "contains-all-substrings"
# target = "src/index.js"
# tokens = ["export default"]
"#;

const EDITOR_3D: &str = r#"# 3D editor components smoke test
#
# Checks the gizmo tools and free camera of the instances editor.

[settings]
title = "3D Editor Components"
base_dir = "newIDE/app"

# File structure

[[expect]]
name = "File existence: Gizmo3DController.js"
kind = "file-exists"
target = "src/InstancesEditor/Gizmo3DController.js"
group = "File Structure"

[[expect]]
name = "File existence: FreeCameraController.js"
kind = "file-exists"
target = "src/InstancesEditor/FreeCameraController.js"
group = "File Structure"

[[expect]]
name = "File existence: SelectedInstances3D.js"
kind = "file-exists"
target = "src/InstancesEditor/SelectedInstances3D.js"
group = "File Structure"

[[expect]]
name = "File existence: Editor3DToolbar.js"
kind = "file-exists"
target = "src/InstancesEditor/Editor3DToolbar.js"
group = "File Structure"

[[expect]]
name = "File existence: index.js"
kind = "file-exists"
target = "src/InstancesEditor/index.js"
group = "File Structure"

# Dependencies

[[expect]]
name = "Three.js dependency"
kind = "json-keys"
target = "package.json"
tokens = ["dependencies.three"]
noun = "dependencies"
group = "Dependencies"

# Code structure

[[expect]]
name = "Imports in Gizmo3DController.js"
kind = "contains-all-substrings"
target = "src/InstancesEditor/Gizmo3DController.js"
tokens = ["* as THREE from 'three'", "TransformControls"]
noun = "imports"
group = "Code Structure"

[[expect]]
name = "Imports in FreeCameraController.js"
kind = "contains-all-substrings"
target = "src/InstancesEditor/FreeCameraController.js"
tokens = ["* as THREE from 'three'"]
noun = "imports"
group = "Code Structure"

[[expect]]
name = "Imports in SelectedInstances3D.js"
kind = "contains-all-substrings"
target = "src/InstancesEditor/SelectedInstances3D.js"
tokens = ["* as THREE from 'three'", "Gizmo3DController"]
noun = "imports"
group = "Code Structure"

[[expect]]
name = "Imports in Editor3DToolbar.js"
kind = "contains-all-substrings"
target = "src/InstancesEditor/Editor3DToolbar.js"
tokens = ["React"]
noun = "imports"
group = "Code Structure"

[[expect]]
name = "Imports in index.js"
kind = "contains-all-substrings"
target = "src/InstancesEditor/index.js"
tokens = ["* as THREE from 'three'", "FreeCameraController", "SelectedInstances3D"]
noun = "imports"
group = "Code Structure"

[[expect]]
name = "Class definition in Gizmo3DController.js"
kind = "contains-all-substrings"
target = "src/InstancesEditor/Gizmo3DController.js"
tokens = ["export default class Gizmo3DController"]
noun = "class definitions"
group = "Code Structure"

[[expect]]
name = "Class definition in FreeCameraController.js"
kind = "contains-all-substrings"
target = "src/InstancesEditor/FreeCameraController.js"
tokens = ["export default class FreeCameraController"]
noun = "class definitions"
group = "Code Structure"

[[expect]]
name = "Class definition in SelectedInstances3D.js"
kind = "contains-all-substrings"
target = "src/InstancesEditor/SelectedInstances3D.js"
tokens = ["export default class SelectedInstances3D"]
noun = "class definitions"
group = "Code Structure"

[[expect]]
name = "Class definition in Editor3DToolbar.js"
kind = "contains-all-substrings"
target = "src/InstancesEditor/Editor3DToolbar.js"
tokens = ["export default function Editor3DToolbar"]
noun = "class definitions"
group = "Code Structure"

# Functionality

[[expect]]
name = "Gizmo3DController methods"
kind = "contains-all-identifiers"
target = "src/InstancesEditor/Gizmo3DController.js"
tokens = ["setObject", "setMode", "toggleSpace", "setEnabled", "isDragging", "getCurrentMode", "dispose"]
group = "Functionality"

[[expect]]
name = "FreeCameraController methods"
kind = "contains-all-identifiers"
target = "src/InstancesEditor/FreeCameraController.js"
tokens = ["enable", "disable", "update", "setTarget", "focusOn", "isEnabled", "dispose"]
group = "Functionality"

[[expect]]
name = "Keyboard shortcuts"
kind = "contains-all-substrings-folded"
target = "src/InstancesEditor/index.js"
tokens = [
    { text = "'t'", label = "translate" },
    { text = "'r'", label = "rotate" },
    { text = "'s'", label = "scale" },
    { text = "'x'", label = "space" },
]
noun = "shortcuts"
group = "Functionality"

[[expect]]
name = "Editor3DToolbar props"
kind = "contains-all-substrings"
target = "src/InstancesEditor/Editor3DToolbar.js"
tokens = [
    "gizmoMode",
    "onGizmoModeChange",
    "freeCameraEnabled",
    "onFreeCameraToggle",
    "gizmoEnabled",
    "onGizmoToggle",
    "onToggleGizmoSpace",
    "gizmoSpace",
]
noun = "props"
group = "Functionality"

# Integration

[[expect]]
name = "3D components integration"
kind = "contains-all-substrings"
target = "src/InstancesEditor/index.js"
tokens = [
    "FreeCameraController",
    "SelectedInstances3D",
    "Editor3DToolbar",
    "_initialize3DControllers",
    "_freeCameraController",
    "_selectedInstances3D",
]
noun = "integrations"
group = "Integration"
"#;
