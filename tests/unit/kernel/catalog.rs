use super::*;

fn option(amount: Amount, label: &str) -> SponsorOption {
    SponsorOption::new(amount, label, format!("/{label}.png"), label)
}

#[test]
fn builtin_catalog_is_valid() {
    let builtin = Catalog::builtin();
    let rebuilt = Catalog::new(builtin.options().to_vec(), builtin.benefits().to_vec());

    assert!(rebuilt.is_ok());
    assert_eq!(builtin.len(), 5);
    assert_eq!(builtin.benefits().len(), 3);
}

#[test]
fn builtin_catalog_order_and_custom_tier() {
    let catalog = Catalog::builtin();
    let labels: Vec<&str> = catalog.options().iter().map(|o| o.label.as_str()).collect();
    assert_eq!(
        labels,
        ["入门支持", "进阶支持", "标准支持", "高级支持", "任意金额"]
    );

    let first = &catalog.options()[0];
    assert_eq!(first.amount, Amount::Fixed(5));
    assert_eq!(first.image_ref, "/5.png");
    assert_eq!(first.display_text, "¥5");

    let custom = &catalog.options()[4];
    assert!(custom.amount.is_custom());
    assert_eq!(custom.image_ref, "/xx.png");
    assert_eq!(custom.display_text, "自定义");
}

#[test]
fn dialog_title_joins_price_and_label() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.options()[1].dialog_title(), "¥10 进阶支持");
}

#[test]
fn empty_catalog_is_rejected() {
    assert_eq!(
        Catalog::new(Vec::new(), Vec::new()).unwrap_err(),
        CatalogError::Empty
    );
}

#[test]
fn duplicate_labels_are_rejected() {
    let err = Catalog::new(
        vec![
            option(Amount::Fixed(5), "入门支持"),
            option(Amount::Fixed(10), "进阶支持"),
            option(Amount::Fixed(20), "入门支持"),
        ],
        Vec::new(),
    )
    .unwrap_err();

    assert_eq!(err, CatalogError::DuplicateLabel("入门支持".to_string()));
    assert_eq!(err.to_string(), "Duplicate sponsor option label: 入门支持");
}

#[test]
fn position_of_only_finds_members() {
    let catalog = Catalog::builtin();
    let member = catalog.options()[3].clone();
    assert_eq!(catalog.position_of(&member).map(OptionId::index), Some(3));

    let mut foreign = member.clone();
    foreign.image_ref = "/other.png".to_string();
    assert_eq!(catalog.position_of(&foreign), None);
}

#[test]
fn id_at_is_bounded() {
    let catalog = Catalog::builtin();
    let last = catalog.id_at(4).unwrap();
    assert_eq!(catalog.get(last).unwrap().label, "任意金额");
    assert!(catalog.id_at(5).is_none());
}

#[test]
fn iter_pairs_ids_with_options_in_order() {
    let catalog = Catalog::builtin();
    for (i, (id, option)) in catalog.iter().enumerate() {
        assert_eq!(id.index(), i);
        assert_eq!(option, &catalog.options()[i]);
    }
}
