pub mod add_member_cmd;
pub mod get_member_cmd;
pub mod remove_member_cmd;
pub mod rename_member_cmd;
pub mod search_members_cmd;
pub mod update_member_cmd;
