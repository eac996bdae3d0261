//! CLI command implementations shared with the binary.
//!
//! | Command | Description |
//! |---------|-------------|
//! | `hook stop` | Stop hook: suggest a memory update after skill use |
//! | `hook user-prompt-submit` | Prompt hook: prepare a task instance directory |
//! | `skills` | List evolving skills and their trigger phrases |

mod skills;

pub use skills::{
    SkillInfo, SkillsOutputFormat, cmd_skills, get_all_skills, write_json, write_table,
};
