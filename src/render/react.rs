use super::{LanguageMode, hook_body};
use crate::core::GlobalCodeBlock;

/// Function component running the block in a mount-only `useEffect`.
pub(super) fn render(language: LanguageMode, block: &GlobalCodeBlock) -> String {
    let (component, callback) = match language {
        LanguageMode::JavaScript => ("const MyComponent = () => {", "() => {"),
        LanguageMode::TypeScript => ("const MyComponent: React.FC = () => {", "(): void => {"),
    };

    format!(
        "import React, {{ useEffect }} from 'react';

{component}
  useEffect({callback}
{body}  }}, []);

  return <div>My Component</div>;
}};

export default MyComponent;
",
        body = hook_body(block, 4),
    )
}
