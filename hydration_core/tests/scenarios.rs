//! End-to-end scenarios, one per literal case this crate is expected to
//! handle correctly: a text-only component, content projection, an
//! element container, compressed list iteration, two instances of one
//! nested component, and a cross-template outlet.

use hydration_core::{serialize_root, serialize_view, AnnotationStore, TemplateIdentityRegistry};
use view_tree::{
    fixtures::FakeDom, EmbeddedView, LView, ProjectionHead, Slot, SlotIndex, TNode, TNodeType,
    TView, TViewRef, ViewContainer, ViewKind,
};

fn text_tnode() -> TNode {
    TNode {
        node_type: TNodeType::Text,
        parent: None,
        next: None,
        projection_next: None,
        projection: None,
        i18n_create_opcodes: Vec::new(),
        insert_before_index: Vec::new(),
        embedded_tview: None,
    }
}

fn element_tnode() -> TNode {
    TNode {
        node_type: TNodeType::Element,
        ..text_tnode()
    }
}

fn container_tnode(embedded: TViewRef) -> TNode {
    TNode {
        node_type: TNodeType::Container,
        embedded_tview: Some(embedded),
        ..text_tnode()
    }
}

fn leaf_tview(selector: Option<&str>) -> TViewRef {
    TViewRef::new(TView {
        header_offset: 0,
        binding_start_index: 1,
        nodes: vec![Some(text_tnode())],
        component_selector: selector.map(Into::into),
    })
}

/// Scenario 1: a component whose template is just `"Hello"`. No
/// reordering at all, so its annotation is the empty object.
#[test]
fn text_only_component_has_empty_annotation() {
    let host = FakeDom::leaf("app-host");
    let text = FakeDom::leaf("Hello");
    let root = LView::new(
        leaf_tview(Some("app")),
        vec![Slot::Dom(text)],
        ViewKind::Component {
            selector: "app".into(),
            host: host.clone(),
        },
    );

    let (store, assignments) = serialize_root(&root, &host, "app".into()).unwrap();
    assert_eq!(store.len(), 1);
    assert!(store.into_table().get(&0).unwrap().is_empty());
    assert_eq!(assignments.len(), 1);
    assert_eq!(assignments[0].key, 0);
}

/// Scenario 2: a `<projector>` component whose `<ng-content/>` is filled
/// with plain text from its usage site. The projector's own annotation
/// records a path to the projected text — see `DESIGN.md` for why this
/// crate attributes the path to the projecting component's own
/// annotation rather than the usage site's.
#[test]
fn projected_text_records_a_path_in_the_projecting_component() {
    let text = FakeDom::leaf("hi");
    let projector_host = FakeDom::with_children("projector", [text.clone()]);

    let projector_tview = TViewRef::new(TView {
        header_offset: 0,
        binding_start_index: 2,
        nodes: vec![
            Some(text_tnode()),
            Some(TNode {
                projection: Some(vec![Some(ProjectionHead::Content(SlotIndex(0)))]),
                ..element_tnode()
            }),
        ],
        component_selector: Some("projector".into()),
    });
    let projector = LView::new(
        projector_tview,
        vec![Slot::Dom(text), Slot::Empty],
        ViewKind::Component {
            selector: "projector".into(),
            host: projector_host.clone(),
        },
    );

    let root_host = FakeDom::leaf("app-host");
    let root_tview = TViewRef::new(TView {
        header_offset: 0,
        binding_start_index: 1,
        nodes: vec![Some(element_tnode())],
        component_selector: Some("app".into()),
    });
    let root = LView::new(
        root_tview,
        vec![Slot::View(projector)],
        ViewKind::Component {
            selector: "app".into(),
            host: root_host.clone(),
        },
    );

    let (store, assignments) = serialize_root(&root, &root_host, "app".into()).unwrap();
    assert_eq!(store.len(), 2, "root and projector get distinct annotations");
    assert_eq!(assignments.len(), 2);

    let table = store.into_table();
    let projector_assignment = assignments
        .iter()
        .find(|a| a.selector.as_ref() == "projector")
        .unwrap();
    let projector_annotation = table.get(&projector_assignment.key).unwrap();
    assert_eq!(
        projector_annotation.nodes.get(&0).map(String::as_str),
        Some("host.firstChild")
    );
}

/// Scenario 3: `<ng-container>X</ng-container><main>Y</main>`. The
/// element container's root-node count is derivable purely by walking
/// siblings; `<main>` needs no path at all.
#[test]
fn element_container_counts_root_nodes() {
    let marker = FakeDom::leaf("ng-container-marker");
    let x_text = FakeDom::leaf("X");
    let main_el = FakeDom::leaf("main");
    let host = FakeDom::with_children("app", [marker.clone(), x_text, main_el.clone()]);

    let tview = TViewRef::new(TView {
        header_offset: 0,
        binding_start_index: 2,
        nodes: vec![
            Some(TNode {
                node_type: TNodeType::ElementContainer,
                next: Some(SlotIndex(1)),
                ..text_tnode()
            }),
            Some(element_tnode()),
        ],
        component_selector: Some("app".into()),
    });
    let root = LView::new(
        tview,
        vec![Slot::Dom(marker), Slot::Dom(main_el)],
        ViewKind::Component {
            selector: "app".into(),
            host: host.clone(),
        },
    );

    let mut registry = TemplateIdentityRegistry::new();
    let mut store = AnnotationStore::new();
    let mut assignments = Vec::new();
    let annotation = serialize_view(&root, &host, &mut registry, &mut store, &mut assignments).unwrap();

    let container = annotation.containers.get(&0).unwrap();
    assert!(container.views.is_empty());
    assert_eq!(container.num_root_nodes, Some(1));
}

/// Scenario 4: a 15-item list where items 7-10 additionally render an
/// inner conditional. Compression should collapse the run into three
/// bands — 6, 4, 5 — rather than merging the (structurally identical)
/// first and third bands across the gap.
#[test]
fn list_iteration_compresses_into_three_bands() {
    let inner_tview = TViewRef::new(TView {
        header_offset: 0,
        binding_start_index: 1,
        nodes: vec![Some(text_tnode())],
        component_selector: None,
    });
    let item_tview = TViewRef::new(TView {
        header_offset: 0,
        binding_start_index: 2,
        nodes: vec![Some(text_tnode()), Some(container_tnode(inner_tview.clone()))],
        component_selector: None,
    });

    let item_texts: Vec<FakeDom> = (1..=15).map(|i| FakeDom::leaf(format!("item{i}"))).collect();
    let list_host = FakeDom::with_children("list", item_texts.clone());
    let inner_anchor = FakeDom::leaf("inner-anchor");

    let outer_views: Vec<EmbeddedView<FakeDom>> = (1..=15)
        .map(|i| {
            let has_inner = (7..=10).contains(&i);
            let inner_views = if has_inner {
                vec![EmbeddedView::Plain(LView::new(
                    inner_tview.clone(),
                    vec![Slot::Dom(FakeDom::leaf(format!("inner{i}")))],
                    ViewKind::Plain,
                ))]
            } else {
                Vec::new()
            };
            let item = LView::new(
                item_tview.clone(),
                vec![
                    Slot::Dom(item_texts[i - 1].clone()),
                    Slot::Container(ViewContainer {
                        anchor: inner_anchor.clone(),
                        views: inner_views,
                    }),
                ],
                ViewKind::Plain,
            );
            EmbeddedView::Plain(item)
        })
        .collect();

    let outer_anchor = FakeDom::leaf("list-anchor");
    let list_tview = TViewRef::new(TView {
        header_offset: 0,
        binding_start_index: 1,
        nodes: vec![Some(container_tnode(item_tview.clone()))],
        component_selector: None,
    });
    let root = LView::new(
        list_tview,
        vec![Slot::Container(ViewContainer {
            anchor: outer_anchor,
            views: outer_views,
        })],
        ViewKind::Plain,
    );

    let mut registry = TemplateIdentityRegistry::new();
    let mut store = AnnotationStore::new();
    let mut assignments = Vec::new();
    let annotation =
        serialize_view(&root, &list_host, &mut registry, &mut store, &mut assignments).unwrap();

    let outer_record = annotation.containers.get(&0).unwrap();
    assert_eq!(outer_record.views.len(), 3);
    assert_eq!(outer_record.views[0].multiplicity, Some(6));
    assert_eq!(outer_record.views[1].multiplicity, Some(4));
    assert_eq!(outer_record.views[2].multiplicity, Some(5));
    let total: usize = outer_record
        .views
        .iter()
        .map(|v| v.multiplicity.unwrap_or(1))
        .sum();
    assert_eq!(total, 15);
}

/// Scenario 5: two instances of the same nested component. Both produce
/// identical annotations and must therefore be assigned the same `ngh`
/// key.
#[test]
fn two_instances_of_same_component_share_one_key() {
    let widget_tview = || leaf_tview(Some("app-widget"));

    let make_instance = |label: &str| {
        let host = FakeDom::leaf(label);
        LView::new(
            widget_tview(),
            vec![Slot::Dom(FakeDom::leaf("widget-text"))],
            ViewKind::Component {
                selector: "app-widget".into(),
                host,
            },
        )
    };

    let root_tview = TViewRef::new(TView {
        header_offset: 0,
        binding_start_index: 2,
        nodes: vec![Some(element_tnode()), Some(element_tnode())],
        component_selector: None,
    });
    let root_host = FakeDom::leaf("app-host");
    let root = LView::new(
        root_tview,
        vec![
            Slot::View(make_instance("widget-a")),
            Slot::View(make_instance("widget-b")),
        ],
        ViewKind::Plain,
    );

    let mut registry = TemplateIdentityRegistry::new();
    let mut store = AnnotationStore::new();
    let mut assignments = Vec::new();
    serialize_view(&root, &root_host, &mut registry, &mut store, &mut assignments).unwrap();

    assert_eq!(store.len(), 1, "identical annotations share one table entry");
    assert_eq!(assignments.len(), 2);
    assert_eq!(assignments[0].key, assignments[1].key);
}

/// Scenario 6: a template defined in one part of the tree is rendered
/// through an outlet elsewhere. Both insertion points must resolve to
/// the same minted template identity.
#[test]
fn cross_template_outlet_shares_one_template_identity() {
    let outlet_tview = TViewRef::new(TView {
        header_offset: 0,
        binding_start_index: 1,
        nodes: vec![Some(text_tnode())],
        component_selector: None,
    });

    let make_container = |anchor: FakeDom, content: FakeDom| {
        Slot::Container(ViewContainer {
            anchor,
            views: vec![EmbeddedView::Plain(LView::new(
                outlet_tview.clone(),
                vec![Slot::Dom(content)],
                ViewKind::Plain,
            ))],
        })
    };

    let root_tview = TViewRef::new(TView {
        header_offset: 0,
        binding_start_index: 2,
        nodes: vec![
            Some(container_tnode(outlet_tview.clone())),
            Some(container_tnode(outlet_tview.clone())),
        ],
        component_selector: None,
    });
    let host = FakeDom::leaf("app-host");
    let root = LView::new(
        root_tview,
        vec![
            make_container(FakeDom::leaf("anchor-a"), FakeDom::leaf("a")),
            make_container(FakeDom::leaf("anchor-b"), FakeDom::leaf("b")),
        ],
        ViewKind::Plain,
    );

    let mut registry = TemplateIdentityRegistry::new();
    let mut store = AnnotationStore::new();
    let mut assignments = Vec::new();
    let annotation =
        serialize_view(&root, &host, &mut registry, &mut store, &mut assignments).unwrap();

    let definition_id = annotation.templates.get(&0).unwrap();
    let insertion_id = annotation.templates.get(&1).unwrap();
    assert_eq!(definition_id, insertion_id);
}
