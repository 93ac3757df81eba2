use super::hook_body;
use crate::core::GlobalCodeBlock;

/// Decorated component class running the block in `ngOnInit`.
///
/// Angular components are TypeScript only.
pub(super) fn render(block: &GlobalCodeBlock) -> String {
    format!(
        "import {{ Component, OnInit }} from '@angular/core';

@Component({{
  selector: 'app-my-component',
  template: '<div>My Component</div>',
}})
export class MyComponent implements OnInit {{
  ngOnInit(): void {{
{body}  }}
}}
",
        body = hook_body(block, 4),
    )
}
