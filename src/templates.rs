//! Bundled starter diagrams.
//!
//! Each template is a ready-to-parse tree diagram in the same dialect the
//! parser accepts from users, so `dsk templates <name>` output pipes
//! straight back into any other command. Content annotations use the
//! single-line `\n` escape convention and expand when scripts or archives
//! are generated.

/// A named starter diagram.
pub struct Template {
    pub name: &'static str,
    pub description: &'static str,
    pub diagram: &'static str,
}

/// All bundled templates, in listing order.
pub const TEMPLATES: &[Template] = &[
    Template {
        name: "tauri",
        description: "Tauri desktop app with a Vite frontend",
        diagram: r#"my-tauri-app/
├─ src/
│  ├─ main.rs [fn main() { println!("Hello from Rust!"); }]
│  └─ lib.rs
├─ frontend/
│  ├─ src/
│  │  ├─ App.tsx [import React from 'react';\n\nexport const App = () => <div>Hello Tauri</div>;]
│  │  └─ main.tsx
│  ├─ public/
│  ├─ package.json
│  └─ vite.config.ts
├─ src-tauri/
│  ├─ tauri.conf.json
│  └─ Cargo.toml
└─ README.md
"#,
    },
    Template {
        name: "nextjs",
        description: "Next.js project with the app router",
        diagram: r#"my-next-app/
├─ app/
│  ├─ layout.tsx
│  ├─ page.tsx [export default function Page() { return <h1>Home</h1> }]
│  └─ api/
│     └─ hello/
│        └─ route.ts
├─ components/
│  └─ Header.tsx
├─ public/
│  ├─ favicon.ico
│  └─ vercel.svg
├─ next.config.js
├─ package.json
├─ tsconfig.json
└─ README.md
"#,
    },
    Template {
        name: "fastapi",
        description: "FastAPI service with tests and Docker",
        diagram: r#"my-api/
├─ app/
│  ├─ __init__.py
│  ├─ main.py [from fastapi import FastAPI\n\napp = FastAPI()\n\n@app.get("/")\nasync def root():\n    return {"message": "Hello World"}]
│  ├─ api/
│  │  ├─ __init__.py
│  │  └─ router.py
│  ├─ core/
│  │  └─ config.py
│  ├─ models/
│  └─ schemas/
├─ tests/
├─ .env
├─ Dockerfile
├─ requirements.txt
└─ README.md
"#,
    },
    Template {
        name: "python-pkg",
        description: "Python package with setuptools packaging",
        diagram: r#"my-package/
├─ my_package/
│  ├─ __init__.py
│  ├─ core.py
│  └─ utils.py
├─ tests/
│  ├─ __init__.py
│  └─ test_core.py
├─ docs/
├─ setup.py [from setuptools import setup, find_packages\n\nsetup(name='my_package', version='0.1', packages=find_packages())]
├─ LICENSE
└─ README.md
"#,
    },
    Template {
        name: "vite",
        description: "Vanilla Vite project",
        diagram: r#"vite-project/
├─ src/
│  ├─ main.js [import './style.css';\n\ndocument.querySelector('.app').innerHTML = '<h1>Hello Vite!</h1>';]
│  ├─ counter.js
│  └─ style.css
├─ public/
│  └─ vite.svg
├─ index.html
├─ package.json
└─ README.md
"#,
    },
];

/// Look up a template by name, ignoring ASCII case.
pub fn find(name: &str) -> Option<&'static Template> {
    TEMPLATES
        .iter()
        .find(|template| template.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dirsketch_parse::parse;

    #[test]
    fn test_every_template_parses_cleanly() {
        for template in TEMPLATES {
            let tree = parse(template.diagram)
                .unwrap_or_else(|e| panic!("template '{}' failed to parse: {e}", template.name));

            assert!(
                tree.has_root_wrapper,
                "template '{}' should open with a root directory",
                template.name
            );
            assert!(
                tree.total_dirs() > 0,
                "template '{}' should contain directories",
                template.name
            );
            assert!(
                tree.total_files() > 0,
                "template '{}' should contain files",
                template.name
            );
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert!(find("fastapi").is_some());
        assert!(find("FastAPI").is_some());
        assert!(find("VITE").is_some());
        assert!(find("rails").is_none());
    }

    #[test]
    fn test_tauri_template_carries_content() {
        let template = find("tauri").unwrap();
        let tree = parse(template.diagram).unwrap();

        let content = tree
            .files
            .get("my-tauri-app/src/main.rs")
            .expect("tauri template should annotate src/main.rs");
        assert!(content.contains("println!"));
    }

    #[test]
    fn test_nextjs_template_nests_api_route() {
        let template = find("nextjs").unwrap();
        let tree = parse(template.diagram).unwrap();

        assert!(tree.files.contains_key("my-next-app/app/api/hello/route.ts"));
        assert_eq!(tree.root_dir, "my-next-app");
    }
}
