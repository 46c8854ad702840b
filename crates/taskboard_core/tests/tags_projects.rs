use taskboard_core::{InMemoryTagRepository, Tag, TagRepository};

fn titles(tags: &[Tag]) -> Vec<&str> {
    tags.iter().map(|tag| tag.title.as_str()).collect()
}

#[test]
fn save_for_project_creates_tag_and_links_it() {
    let repo = InMemoryTagRepository::new();
    assert_eq!(repo.save_for_project(&Tag::new("work", "#3068df"), 1).unwrap(), 1);

    let global = repo.list().unwrap();
    assert_eq!(global.len(), 1);
    assert_eq!(global[0].id, 1);
    assert_eq!(titles(&repo.list_by_project(1).unwrap()), vec!["work"]);
    assert!(repo.list_by_project(2).unwrap().is_empty());
}

#[test]
fn saving_the_same_link_twice_lists_the_tag_once() {
    let repo = InMemoryTagRepository::new();
    let id = repo.save(&Tag::new("work", "#3068df")).unwrap();
    let tag = repo.get(id).unwrap().unwrap();

    assert_eq!(repo.save_for_project(&tag, 5).unwrap(), 1);
    assert_eq!(repo.save_for_project(&tag, 5).unwrap(), 1);

    let linked = repo.list_by_project(5).unwrap();
    assert_eq!(linked.len(), 1);
    assert_eq!(linked[0].id, id);
    assert_eq!(repo.list().unwrap().len(), 1);
}

#[test]
fn project_listing_follows_global_store_order() {
    let repo = InMemoryTagRepository::new();
    let first = repo.save(&Tag::new("family", "#1E90FF")).unwrap();
    let second = repo.save(&Tag::new("friends", "#FF69B4")).unwrap();
    let third = repo.save(&Tag::new("health", "#32CD32")).unwrap();

    for id in [third, first, second] {
        let tag = repo.get(id).unwrap().unwrap();
        repo.save_for_project(&tag, 1).unwrap();
    }

    assert_eq!(
        titles(&repo.list_by_project(1).unwrap()),
        vec!["family", "friends", "health"]
    );
}

#[test]
fn global_delete_unlinks_tag_from_every_project() {
    let repo = InMemoryTagRepository::new();
    let id = repo.save(&Tag::new("shared", "#000000")).unwrap();
    let keep = repo.save(&Tag::new("keep", "#FFFFFF")).unwrap();
    let shared = repo.get(id).unwrap().unwrap();
    let kept = repo.get(keep).unwrap().unwrap();
    for project_id in [1, 2, 3] {
        repo.save_for_project(&shared, project_id).unwrap();
    }
    repo.save_for_project(&kept, 2).unwrap();

    assert_eq!(repo.delete(&shared).unwrap(), 1);

    assert!(repo.get(id).unwrap().is_none());
    for project_id in [1, 3] {
        assert!(repo.list_by_project(project_id).unwrap().is_empty());
    }
    assert_eq!(titles(&repo.list_by_project(2).unwrap()), vec!["keep"]);
}

#[test]
fn scoped_delete_keeps_tag_globally() {
    let repo = InMemoryTagRepository::new();
    let id = repo.save(&Tag::new("work", "#3068df")).unwrap();
    let tag = repo.get(id).unwrap().unwrap();
    repo.save_for_project(&tag, 1).unwrap();
    repo.save_for_project(&tag, 2).unwrap();

    assert_eq!(repo.delete_for_project(&tag, 1).unwrap(), 1);

    assert_eq!(titles(&repo.list().unwrap()), vec!["work"]);
    assert!(repo.list_by_project(1).unwrap().is_empty());
    assert_eq!(repo.list_by_project(2).unwrap().len(), 1);
}

#[test]
fn scoped_delete_reports_whether_project_had_links() {
    let repo = InMemoryTagRepository::new();
    let id = repo.save(&Tag::new("work", "#3068df")).unwrap();
    let other = repo.save(&Tag::new("other", "#000000")).unwrap();
    let tag = repo.get(id).unwrap().unwrap();
    let other = repo.get(other).unwrap().unwrap();
    repo.save_for_project(&tag, 1).unwrap();

    assert_eq!(repo.delete_for_project(&tag, 7).unwrap(), 0);
    // Project 1 has a link set, so this counts even though `other` was never linked.
    assert_eq!(repo.delete_for_project(&other, 1).unwrap(), 1);
    assert_eq!(repo.list_by_project(1).unwrap().len(), 1);
}

#[test]
fn unlink_project_drops_all_links_of_one_project() {
    let repo = InMemoryTagRepository::new();
    for (title, project_id) in [("a", 1), ("b", 1), ("c", 2)] {
        repo.save_for_project(&Tag::new(title, "#000000"), project_id).unwrap();
    }

    assert_eq!(repo.unlink_project(1).unwrap(), 2);
    assert!(repo.list_by_project(1).unwrap().is_empty());
    assert_eq!(titles(&repo.list_by_project(2).unwrap()), vec!["c"]);
    assert_eq!(repo.list().unwrap().len(), 3);
    assert_eq!(repo.unlink_project(1).unwrap(), 0);
}

#[test]
fn tag_update_is_visible_through_project_listing() {
    let repo = InMemoryTagRepository::new();
    repo.save_for_project(&Tag::new("health", "#32CD32"), 3).unwrap();

    let mut tag = repo.get(1).unwrap().unwrap();
    tag.title = "wellness".to_string();
    tag.is_selected = true;
    assert_eq!(repo.save(&tag).unwrap(), 1);

    let linked = repo.list_by_project(3).unwrap();
    assert_eq!(titles(&linked), vec!["wellness"]);
}

#[test]
fn linking_unsaved_nonzero_id_resolves_once_that_id_is_allocated() {
    let repo = InMemoryTagRepository::new();
    let mut ghost = Tag::new("ghost", "#000000");
    ghost.id = 9;
    assert_eq!(repo.save_for_project(&ghost, 1).unwrap(), 1);
    assert!(repo.list().unwrap().is_empty());
    assert!(repo.list_by_project(1).unwrap().is_empty());

    for n in 0..9 {
        repo.save(&Tag::new(format!("t{n}"), "#000000")).unwrap();
    }

    assert_eq!(titles(&repo.list_by_project(1).unwrap()), vec!["t8"]);
}
