//! Bundled API documentation sections and the lookups the CLI uses to
//! list, search, and select them.

use crate::entity::Section;

const SECTIONS: &[Section] = &[
    Section {
        id: "getting-started",
        title: "Getting Started",
        description: "Introduction to the scripting API",
        content: "# Getting Started\n\nThe scripting API lets you automate tasks and build custom tools.\n\n## Installation\n\nInstall the Python module before writing your first script:\n\n```bash\npip install bpy\n```\n\n## First Script\n\nA minimal script that resets the scene and adds a cube:\n\n```python\nimport bpy\n\nbpy.ops.object.select_all(action='SELECT')\nbpy.ops.object.delete(use_global=False)\n\nbpy.ops.mesh.primitive_cube_add(location=(0, 0, 0))\n```\n",
    },
    Section {
        id: "objects",
        title: "Object Manipulation",
        description: "Creating, modifying and deleting objects",
        content: "# Object Manipulation\n\n## Creating Objects\n\n```python\nimport bpy\n\nbpy.ops.mesh.primitive_cube_add(location=(0, 0, 0))\nbpy.ops.mesh.primitive_uv_sphere_add(location=(2, 0, 0))\n```\n\n## Modifying Properties\n\n```python\nobj = bpy.data.objects['Cube']\n\nobj.location = (1, 2, 3)\nobj.scale = (2, 2, 2)\n```\n\n## Deleting Objects\n\n```python\nbpy.data.objects.remove(bpy.data.objects['Cube'], do_unlink=True)\n```\n",
    },
    Section {
        id: "materials",
        title: "Materials and Shaders",
        description: "Working with materials and node trees",
        content: "# Materials and Shaders\n\n## Creating a Basic Material\n\n```python\nimport bpy\n\nmaterial = bpy.data.materials.new(name=\"Demo\")\nmaterial.use_nodes = True\n```\n\n## Applying a Material\n\n```python\nobj = bpy.context.active_object\n\nif obj.data.materials:\n    obj.data.materials[0] = material\nelse:\n    obj.data.materials.append(material)\n```\n",
    },
    Section {
        id: "animation",
        title: "Animation",
        description: "Driving keyframes from scripts",
        content: "# Animation\n\n## Basic Keyframes\n\n```python\nimport bpy\n\nobj = bpy.context.active_object\n\nobj.location = (0, 0, 0)\nobj.keyframe_insert(data_path=\"location\", frame=1)\n\nobj.location = (5, 0, 0)\nobj.keyframe_insert(data_path=\"location\", frame=50)\n```\n\n## Timeline Setup\n\n```python\nscene = bpy.context.scene\nscene.frame_start = 1\nscene.frame_end = 100\n```\n",
    },
];

pub fn sections() -> &'static [Section] {
    SECTIONS
}

pub fn find(id: &str) -> Option<&'static Section> {
    SECTIONS.iter().find(|section| section.id == id)
}

/// Case-insensitive substring search over title, description and
/// content. An empty term matches every section.
pub fn search(term: &str) -> Vec<&'static Section> {
    let term = term.to_lowercase();
    SECTIONS
        .iter()
        .filter(|section| {
            section.title.to_lowercase().contains(&term)
                || section.description.to_lowercase().contains(&term)
                || section.content.to_lowercase().contains(&term)
        })
        .collect()
}
