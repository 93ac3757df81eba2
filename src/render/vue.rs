use super::{LanguageMode, hook_body};
use crate::core::GlobalCodeBlock;

/// `<script setup>` component running the block in `onMounted`.
pub(super) fn render(language: LanguageMode, block: &GlobalCodeBlock) -> String {
    let (script_tag, callback) = match language {
        LanguageMode::JavaScript => ("<script setup>", "() => {"),
        LanguageMode::TypeScript => ("<script setup lang=\"ts\">", "(): void => {"),
    };

    format!(
        "<template>
  <div>My Component</div>
</template>

{script_tag}
import {{ onMounted }} from 'vue';

onMounted({callback}
{body}}});
</script>
",
        body = hook_body(block, 2),
    )
}
