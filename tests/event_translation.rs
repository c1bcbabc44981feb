use fswatch::watch::ChangeKind;
use notify::EventKind;
use notify::event::{
    AccessKind, CreateKind, DataChange, MetadataKind, ModifyKind, RemoveKind, RenameMode,
};

#[test]
fn create_remove_and_data_changes_map_to_change_kinds() {
    assert_eq!(
        ChangeKind::from_notify(EventKind::Create(CreateKind::File)),
        Some(ChangeKind::Created)
    );
    assert_eq!(
        ChangeKind::from_notify(EventKind::Remove(RemoveKind::File)),
        Some(ChangeKind::Deleted)
    );
    assert_eq!(
        ChangeKind::from_notify(EventKind::Modify(ModifyKind::Data(DataChange::Content))),
        Some(ChangeKind::Updated)
    );
}

#[test]
fn renames_map_to_delete_and_create() {
    assert_eq!(
        ChangeKind::from_notify(EventKind::Modify(ModifyKind::Name(RenameMode::From))),
        Some(ChangeKind::Deleted)
    );
    assert_eq!(
        ChangeKind::from_notify(EventKind::Modify(ModifyKind::Name(RenameMode::To))),
        Some(ChangeKind::Created)
    );
}

#[test]
fn access_and_metadata_events_are_ignored() {
    assert_eq!(
        ChangeKind::from_notify(EventKind::Access(AccessKind::Read)),
        None
    );
    assert_eq!(
        ChangeKind::from_notify(EventKind::Modify(ModifyKind::Metadata(
            MetadataKind::Permissions
        ))),
        None
    );
}

#[test]
fn only_created_and_deleted_invalidate_the_session() {
    assert!(ChangeKind::Created.invalidates_session());
    assert!(ChangeKind::Deleted.invalidates_session());
    assert!(!ChangeKind::Updated.invalidates_session());
}
