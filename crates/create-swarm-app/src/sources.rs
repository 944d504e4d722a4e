//! Source file templates

use crate::template::CodeType;

pub const APP_TSX: &str = r#"import { BatchId, Bee } from '@ethersphere/bee-js'
import { useState } from 'react'
import { BEE_HOST } from './config'

export function App() {
    const [batchId, setBatchId] = useState<BatchId | null>(null)
    const [file, setFile] = useState<File | null>(null)
    const [fileList, setFileList] = useState<FileList | null>(null)
    const [swarmHash, setSwarmHash] = useState<string | null>(null)

    async function getOrCreatePostageBatch() {
        const bee = new Bee(BEE_HOST)

        const batches = await bee.getAllPostageBatch()
        const usable = batches.find(x => x.usable)

        if (usable) {
            setBatchId(usable.batchID)
        } else {
            setBatchId(await bee.createPostageBatch('500000000', 20))
        }
    }

    async function uploadFile() {
        if (!batchId) {
            return
        }
        const bee = new Bee(BEE_HOST)
        const result = await bee.uploadFile(batchId, file)
        setSwarmHash(result.reference)
        setFile(null)
    }

    async function uploadDirectory() {
        if (!batchId || !fileList) {
            return
        }
        const bee = new Bee(BEE_HOST)
        const result = await bee.uploadFiles(batchId, fileList)
        setSwarmHash(result.reference)
        setFileList(null)
    }

    const directoryInputAttributes = {
        webkitdirectory: '',
        directory: '',
        multiple: true
    }

    return (
        <div>
            {!batchId && <button onClick={getOrCreatePostageBatch}>Get or create postage batch</button>}
            {batchId && <p>Batch ID: {batchId}</p>}
            {batchId && !swarmHash && (
                <div>
                    <p>Single file upload</p>
                    <input type="file" onChange={e => setFile(e.target.files![0])} />
                    <button onClick={uploadFile}>Upload file</button>

                    <p>Directory upload</p>
                    <input type="file" onChange={e => setFileList(e.target.files)} {...directoryInputAttributes} />
                    <button onClick={uploadDirectory}>Upload directory</button>
                </div>
            )}
            {swarmHash && <a href={BEE_HOST + '/bzz/' + swarmHash}>Swarm hash: {swarmHash}</a>}
        </div>
    )
}
"#;

pub const INDEX_TSX: &str = r#"import { createRoot } from 'react-dom/client'
import { App } from './App'

const rootElement = document.getElementById('root')
if (rootElement) {
    const root = createRoot(rootElement)
    root.render(<App />)
}
"#;

pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
    <head>
        <meta charset="UTF-8">
        <meta name="viewport" content="width=device-width, initial-scale=1.0">
        <title>Swarm App</title>
    </head> 
    <body>
        <div id="root"></div>
        <script type="module" src="src/index.tsx"></script>
    </body>
</html>
"#;

pub const VITE_TSCONFIG: &str = r#"{
    "compilerOptions": {
        "target": "ES2020",
        "useDefineForClassFields": true,
        "lib": ["ES2020", "DOM", "DOM.Iterable"],
        "module": "ESNext",
        "skipLibCheck": true,
        "esModuleInterop": true,

        /* Bundler mode */
        "moduleResolution": "bundler",
        "allowImportingTsExtensions": true,
        "resolveJsonModule": true,
        "isolatedModules": true,
        "noEmit": true,
        "jsx": "react-jsx",

        /* Linting */
        "strict": true,
        "noUnusedLocals": true,
        "noUnusedParameters": true,
        "noFallthroughCasesInSwitch": true
    },
    "include": ["src"]
}
"#;

pub const NODE_TSCONFIG: &str = r#"{
    "$schema": "https://json.schemastore.org/tsconfig",
    "display": "Node 16",

    "compilerOptions": {
        "outDir": "dist",
        "lib": ["ES2022"],
        "module": "CommonJS",
        "target": "ES2022",
        "declaration": false,
        "strict": true,
        "skipLibCheck": true,
        "forceConsistentCasingInFileNames": true,
        "moduleResolution": "node",
        "esModuleInterop": true,
        "noImplicitAny": true,
        "strictNullChecks": true
    }
}
"#;

const BEE_HOST: &str = "http://localhost:1633";

/// `config.js` / `config.ts`
pub fn render_config(code: CodeType) -> String {
    match code {
        CodeType::CommonJs => format!("module.exports = {{ BEE_HOST: '{}' }}\n", BEE_HOST),
        _ => format!("export const BEE_HOST = '{}'\n", BEE_HOST),
    }
}

/// One import statement in the module system of `code`
pub fn render_import(code: CodeType, imports: &[&str], location: &str) -> String {
    let names = imports.join(", ");
    match code {
        CodeType::CommonJs => format!("const {{ {} }} = require('{}')", names, location),
        _ => {
            let suffix = if code == CodeType::EsModules && location.starts_with('.') {
                ".js"
            } else {
                ""
            };
            format!("import {{ {} }} from '{}{}'", names, location, suffix)
        }
    }
}

const INDEX_BODY: &str = r#"

main()

async function main() {
    const bee = new Bee(BEE_HOST)
    const batchId = await getOrCreatePostageBatch(bee)
    console.log('Batch ID', batchId)
    const data = 'Hello, world! The current time is ' + new Date().toLocaleString()
    const uploadResult = await bee.uploadData(batchId, data)
    console.log('Swarm hash', uploadResult.reference)
    const downloadResult = await bee.downloadData(uploadResult.reference)
    console.log('Downloaded data:', downloadResult.text())
}

async function getOrCreatePostageBatch("#;

const INDEX_TAIL: &str = r#") {
    const batches = await bee.getAllPostageBatch()
    const usable = batches.find(x => x.usable)
  
    if (usable) {
        return usable.batchID
    } else {
        return bee.createPostageBatch('500000000', 20)
    }
}
"#;

/// Node entry point, `src/index.js` or `src/index.ts`
pub fn render_index(code: CodeType) -> String {
    let param = if code == CodeType::TypeScript {
        "bee: Bee"
    } else {
        "bee"
    };
    [
        render_import(code, &["Bee"], "@ethersphere/bee-js"),
        "\n".to_string(),
        render_import(code, &["BEE_HOST"], "./config"),
        INDEX_BODY.to_string(),
        param.to_string(),
        INDEX_TAIL.to_string(),
    ]
    .concat()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_module() {
        assert_eq!(
            render_config(CodeType::CommonJs),
            "module.exports = { BEE_HOST: 'http://localhost:1633' }\n"
        );
        assert_eq!(
            render_config(CodeType::EsModules),
            "export const BEE_HOST = 'http://localhost:1633'\n"
        );
        assert_eq!(
            render_config(CodeType::TypeScript),
            render_config(CodeType::EsModules)
        );
    }

    #[test]
    fn test_imports() {
        assert_eq!(
            render_import(CodeType::CommonJs, &["Bee"], "@ethersphere/bee-js"),
            "const { Bee } = require('@ethersphere/bee-js')"
        );
        assert_eq!(
            render_import(CodeType::EsModules, &["BEE_HOST"], "./config"),
            "import { BEE_HOST } from './config.js'"
        );
        assert_eq!(
            render_import(CodeType::EsModules, &["Bee"], "@ethersphere/bee-js"),
            "import { Bee } from '@ethersphere/bee-js'"
        );
        assert_eq!(
            render_import(CodeType::TypeScript, &["A", "B"], "./config"),
            "import { A, B } from './config'"
        );
    }

    #[test]
    fn test_index_variants() {
        let cjs = render_index(CodeType::CommonJs);
        assert!(cjs.starts_with(
            "const { Bee } = require('@ethersphere/bee-js')\nconst { BEE_HOST } = require('./config')\n\nmain()\n"
        ));
        assert!(cjs.contains("async function getOrCreatePostageBatch(bee) {\n"));
        assert!(cjs.contains("batches.find(x => x.usable)\n  \n    if (usable)"));

        let ts = render_index(CodeType::TypeScript);
        assert!(ts.contains("async function getOrCreatePostageBatch(bee: Bee) {\n"));
        assert!(ts.ends_with("    }\n}\n"));
    }

    #[test]
    fn test_index_html_head() {
        assert!(INDEX_HTML.contains("    </head> \n    <body>"));
        assert!(INDEX_HTML.contains("src=\"src/index.tsx\""));
    }
}
