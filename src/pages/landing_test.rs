use super::*;

#[test]
fn register_links_preselect_role() {
    assert_eq!(register_link(Role::Citizen), "/auth?action=register&role=citizen");
    assert_eq!(register_link(Role::Volunteer), "/auth?action=register&role=volunteer");
}

#[test]
fn citizen_preview_is_active_by_default() {
    assert_eq!(Preview::default(), Preview::Citizen);
    assert_eq!(Preview::ALL.len(), 3);
}
