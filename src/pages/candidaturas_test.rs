use super::*;

fn candidatura(id: i64, post_id: i64, status: Option<&str>) -> Candidatura {
    Candidatura {
        candidatura_id: id,
        post_id,
        texto_post: format!("Projeto {post_id}"),
        nome_candidato: format!("Artista {id}"),
        email_candidato: format!("artista{id}@example.com"),
        data_candidatura: "2026-08-02 09:30:00".to_owned(),
        status: status.map(str::to_owned),
    }
}

#[test]
fn apply_review_accepts_the_matching_entry() {
    let mut list = vec![candidatura(1, 10, None), candidatura(2, 10, None)];
    apply_review(&mut list, 2, true);
    assert_eq!(list[0].status, None);
    assert_eq!(list[1].status.as_deref(), Some("aceito"));
}

#[test]
fn apply_review_rejects_the_matching_entry() {
    let mut list = vec![candidatura(1, 10, Some("aceito"))];
    apply_review(&mut list, 1, false);
    assert_eq!(list[0].status.as_deref(), Some("rejeitado"));
}

#[test]
fn apply_review_ignores_unknown_ids() {
    let mut list = vec![candidatura(1, 10, None)];
    apply_review(&mut list, 99, true);
    assert_eq!(list[0].status, None);
}

#[test]
fn group_accepted_keeps_only_accepted_entries() {
    let list = vec![
        candidatura(1, 10, Some("aceito")),
        candidatura(2, 10, Some("rejeitado")),
        candidatura(3, 11, None),
    ];
    let groups = group_accepted(&list);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].0, 10);
    assert_eq!(groups[0].1.len(), 1);
    assert_eq!(groups[0].1[0].candidatura_id, 1);
}

#[test]
fn group_accepted_groups_by_post_in_first_seen_order() {
    let list = vec![
        candidatura(1, 11, Some("aceito")),
        candidatura(2, 10, Some("aceito")),
        candidatura(3, 11, Some("aceito")),
    ];
    let groups = group_accepted(&list);
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].0, 11);
    assert_eq!(groups[0].1.len(), 2);
    assert_eq!(groups[1].0, 10);
}

#[test]
fn group_accepted_is_empty_without_accepted_entries() {
    let list = vec![candidatura(1, 10, None), candidatura(2, 10, Some("rejeitado"))];
    assert!(group_accepted(&list).is_empty());
}
