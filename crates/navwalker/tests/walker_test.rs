#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Walker integration tests.
//!
//! Renders the sample forests from `navwalker-test-utils` and checks the
//! emitted markup against the shapes the Bootstrap 4 navbar expects.

use navwalker::walker::{AttrName, ItemSpacing, MaxDepth};
use navwalker::{Escaper, Forest, Hooks, MenuItem, RenderOptions, Walker, render};
use navwalker_test_utils::{chain_menu, sample_menu, test_link};

fn forest(items: Vec<MenuItem>) -> Forest {
    Forest::build(items).expect("valid forest")
}

fn discard() -> RenderOptions {
    RenderOptions {
        item_spacing: ItemSpacing::Discard,
        ..RenderOptions::default()
    }
}

const SAMPLE_MARKUP: &str = concat!(
    "<li id=\"menu-item-1\" class=\"menu-item-1 nav-item dropdown\">",
    "<a href=\"#\" class=\"nav-link dropdown-toggle\" data-toggle=\"dropdown\" aria-haspopup=\"true\">Products</a>\n",
    "<div role=\"menu\" class=\"sub-menu dropdown-menu\">\n",
    "\t<a href=\"/widgets\" class=\"dropdown-item\">Widgets</a>\n",
    "\t<div role=\"presentation\" class=\"dropdown-divider\"></div>\n",
    "\t<h6 role=\"presentation\" class=\"dropdown-header\">More</h6>\n",
    "\t<a href=\"/gadgets\" aria-current=\"page\" class=\"dropdown-item\">Gadgets</a>\n",
    "</div>\n",
    "</li>\n",
    "<li id=\"menu-item-6\" class=\"menu-item-6 nav-item\"><a href=\"/about\" class=\"nav-link\">About</a></li>\n",
    "<li role=\"presentation\" id=\"menu-item-7\" class=\"menu-item-7 nav-item disabled\"><a href=\"#\">Coming soon</a></li>\n",
);

#[test]
fn test_single_link_end_to_end() {
    let html = Walker::default().render(&forest(vec![test_link(5, "About", "/about").build()]));
    assert_eq!(
        html,
        "<li id=\"menu-item-5\" class=\"menu-item-5 nav-item\"><a href=\"/about\" class=\"nav-link\">About</a></li>\n"
    );
}

#[test]
fn test_sample_menu_markup() {
    let html = Walker::default().render(&forest(sample_menu()));
    assert_eq!(html, SAMPLE_MARKUP);
}

#[test]
fn test_discard_spacing_has_no_whitespace_fragments() {
    let html = Walker::new(discard()).render(&forest(sample_menu()));
    assert!(!html.contains('\t'));
    assert!(!html.contains('\n'));
    assert_eq!(html, SAMPLE_MARKUP.replace(['\t', '\n'], ""));
}

#[test]
fn test_indentation_increases_with_depth() {
    let html = Walker::default().render(&forest(chain_menu(4)));

    for level in 2..=4usize {
        let line = html
            .lines()
            .find(|line| line.contains(&format!(">Level {level}<")))
            .expect("level rendered");
        let tabs = line.chars().take_while(|&c| c == '\t').count();
        assert_eq!(tabs, level - 1, "line: {line:?}");
    }

    // Wrappers sit one tab shallower than the items inside them
    let wrappers: Vec<usize> = html
        .lines()
        .filter(|line| line.contains("role=\"menu\""))
        .map(|line| line.chars().take_while(|&c| c == '\t').count())
        .collect();
    assert_eq!(wrappers, vec![0, 1, 2]);
}

#[test]
fn test_max_depth_one_truncates_below_first_level() {
    let options = RenderOptions {
        max_depth: MaxDepth::Limited(1),
        ..RenderOptions::default()
    };
    let html = Walker::new(options).render(&forest(chain_menu(4)));

    assert!(html.contains(">Level 1<"));
    assert!(html.contains(">Level 2<"));
    assert!(!html.contains("Level 3"));
    assert!(!html.contains("Level 4"));
    assert_eq!(html.matches("role=\"menu\"").count(), 1);
}

#[test]
fn test_max_depth_zero_keeps_toggle_but_no_panel() {
    let options = RenderOptions {
        max_depth: MaxDepth::Limited(0),
        ..RenderOptions::default()
    };
    let html = Walker::new(options).render(&forest(chain_menu(3)));

    assert!(html.contains("dropdown-toggle"));
    assert!(!html.contains("role=\"menu\""));
    assert!(!html.contains("Level 2"));
    assert!(html.ends_with("</li>\n"));
}

#[test]
fn test_top_level_branch_toggle_attributes() {
    let items = vec![
        test_link(1, "Shop", "/shop").build(),
        test_link(2, "Cart", "/cart").with_parent(1).build(),
    ];
    let html = Walker::default().render(&forest(items));

    assert!(html.contains("aria-haspopup=\"true\""));
    assert!(html.contains("data-toggle=\"dropdown\""));
    assert!(html.contains("<a href=\"#\""));
    assert!(!html.contains("/shop"));
    assert!(!html.contains("data-hover"));
}

#[test]
fn test_branch_tag_without_loaded_children() {
    let items = vec![
        test_link(1, "Shop", "/shop")
            .with_class("menu-item-has-children")
            .build(),
    ];
    let html = Walker::default().render(&forest(items));
    assert!(html.contains("class=\"menu-item-has-children menu-item-1 nav-item dropdown\""));
    assert!(html.contains("dropdown-toggle"));
    assert!(!html.contains("role=\"menu\""));
}

#[test]
fn test_dropdown_on_hover() {
    let options = RenderOptions {
        dropdown_on_hover: true,
        ..RenderOptions::default()
    };
    let html = Walker::new(options).render(&forest(sample_menu()));
    assert!(html.contains(
        "data-toggle=\"dropdown\" aria-haspopup=\"true\" data-hover=\"dropdown\">Products</a>"
    ));
}

#[test]
fn test_divider_renders_no_anchor_and_no_children() {
    let items = vec![
        test_link(1, "Menu", "/menu").build(),
        test_link(2, "DIVIDER", "/ignored").with_parent(1).build(),
        test_link(3, "Hidden", "/hidden").with_parent(2).build(),
    ];
    let html = Walker::default().render(&forest(items));

    assert!(html.contains("\t<div role=\"presentation\" class=\"dropdown-divider\"></div>\n"));
    assert!(!html.contains("/ignored"));
    assert!(!html.contains("Hidden"));
    assert!(!html.contains("menu-item-2"));
    assert_eq!(html.matches("role=\"menu\"").count(), 1);
}

#[test]
fn test_dropdown_header_hides_children() {
    let items = vec![
        test_link(1, "Menu", "/menu").build(),
        test_link(2, "Section", "").header().with_parent(1).build(),
        test_link(3, "Kid", "/kid").with_parent(2).build(),
    ];
    let html = Walker::default().render(&forest(items));

    assert!(html.contains("\t<h6 role=\"presentation\" class=\"dropdown-header\">Section</h6>\n"));
    assert!(!html.contains("Kid"));
    assert!(!html.contains("/kid"));
    assert_eq!(html.matches("role=\"menu\"").count(), 1);
}

#[test]
fn test_top_level_divider_title_is_a_plain_link() {
    let html = Walker::default().render(&forest(vec![test_link(1, "Divider", "/d").build()]));
    assert!(html.contains("<a href=\"/d\" class=\"nav-link\">Divider</a>"));
}

#[test]
fn test_nested_disabled_link() {
    let items = vec![
        test_link(1, "Menu", "/menu").build(),
        test_link(2, "Old", "/old").disabled().with_parent(1).build(),
    ];
    let html = Walker::default().render(&forest(items));
    assert!(html.contains(
        "\t<a title=\"disabled\" href=\"/old\" class=\"dropdown-item disabled\">Old</a>\n"
    ));
}

#[test]
fn test_active_top_level_link() {
    let html = Walker::default().render(&forest(vec![
        test_link(1, "Home", "/").current().build(),
    ]));
    assert_eq!(
        html,
        "<li id=\"menu-item-1\" class=\"current-menu-item menu-item-1 nav-item active\"><a href=\"/\" aria-current=\"page\" class=\"active nav-link\">Home</a></li>\n"
    );
}

#[test]
fn test_new_window_link_gets_rel() {
    let html = Walker::default().render(&forest(vec![
        test_link(1, "Docs", "https://docs.example.com")
            .with_target("_blank")
            .build(),
        test_link(2, "Blog", "https://blog.example.com")
            .with_target("_blank")
            .with_rel("me")
            .build(),
    ]));
    assert!(html.contains(
        "<a target=\"_blank\" rel=\"noopener noreferrer\" href=\"https://docs.example.com\" class=\"nav-link\">Docs</a>"
    ));
    assert!(html.contains("rel=\"me\""));
}

#[test]
fn test_title_is_escaped() {
    let html = Walker::default().render(&forest(vec![
        test_link(1, "<script>alert('x')</script>", "/x").build(),
        test_link(2, "Menu", "/menu").build(),
        test_link(3, "<b>Header</b>", "").header().with_parent(2).build(),
    ]));

    assert!(!html.contains("<script>"));
    assert!(!html.contains("<b>"));
    assert!(html.contains("&lt;script&gt;alert(&#x27;x&#x27;)&lt;/script&gt;"));
    assert!(html.contains("&lt;b&gt;Header&lt;/b&gt;"));
}

#[test]
fn test_unsafe_url_drops_href() {
    let html = Walker::default().render(&forest(vec![
        test_link(1, "Bad", "javascript:alert(1)").build(),
        test_link(2, "Quote", "/a\"onmouseover=\"x").build(),
    ]));
    assert!(!html.contains("javascript"));
    assert!(html.contains("<a class=\"nav-link\">Bad</a>"));
    assert!(!html.contains("\"onmouseover"));
}

#[test]
fn test_link_wrapping_options() {
    let options = RenderOptions {
        before_link: "<span class=\"wrap\">".to_string(),
        after_link: "</span>".to_string(),
        link_before_text: "<i></i> ".to_string(),
        link_after_text: " &raquo;".to_string(),
        ..discard()
    };
    let html = Walker::new(options).render(&forest(vec![test_link(1, "Go", "/go").build()]));
    assert_eq!(
        html,
        "<li id=\"menu-item-1\" class=\"menu-item-1 nav-item\"><span class=\"wrap\"><a href=\"/go\" class=\"nav-link\"><i></i> Go &raquo;</a></span></li>"
    );
}

#[test]
fn test_render_is_idempotent() {
    let forest = forest(sample_menu());
    let walker = Walker::default();
    assert_eq!(walker.render(&forest), walker.render(&forest));
    assert_eq!(
        render(&forest, &RenderOptions::default()),
        walker.render(&forest)
    );
}

#[test]
fn test_concurrent_renders_share_a_walker() {
    let forest = forest(sample_menu());
    let walker = Walker::default();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| walker.render(&forest)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), SAMPLE_MARKUP);
        }
    });
}

#[test]
fn test_item_hooks() {
    let hooks = Hooks::new()
        .on_item_classes(|mut classes, _item, depth| {
            classes.push(format!("depth-{depth}"));
            classes
        })
        .on_item_id(|_id, item, _depth| format!("nav-{}", item.id))
        .on_link_attributes(|mut attrs, _item, depth| {
            attrs.set(AttrName::Other("data-depth".to_string()), depth.to_string());
            attrs
        })
        .on_item_title(|title, _item, _depth| title.to_uppercase())
        .on_item_output(|output, _item, _depth| format!("{output}<!-- end -->"));

    let items = vec![
        test_link(1, "Home", "/").build(),
        test_link(2, "Sub", "/sub").with_parent(1).build(),
    ];
    let html = Walker::new(discard())
        .with_hooks(hooks)
        .render(&forest(items));

    assert_eq!(
        html,
        concat!(
            "<li id=\"nav-1\" class=\"menu-item-1 nav-item dropdown depth-0\">",
            "<a href=\"#\" class=\"nav-link dropdown-toggle\" data-toggle=\"dropdown\" aria-haspopup=\"true\" data-depth=\"0\">HOME</a><!-- end -->",
            "<div role=\"menu\" class=\"sub-menu dropdown-menu\">",
            "<a href=\"/sub\" class=\"dropdown-item\" data-depth=\"1\">SUB</a><!-- end -->",
            "</div>",
            "</li>",
        )
    );
}

#[test]
fn test_title_hook_output_is_still_escaped() {
    let hooks = Hooks::new().on_item_title(|title, _item, _depth| format!("<em>{title}</em>"));
    let html = Walker::new(discard())
        .with_hooks(hooks)
        .render(&forest(vec![test_link(1, "Home", "/").build()]));
    assert!(html.contains("&lt;em&gt;Home&lt;/em&gt;"));
}

#[test]
fn test_level_hooks() {
    let hooks = Hooks::new()
        .on_level_classes(|mut classes, depth| {
            classes.push(format!("level-{depth}"));
            classes
        })
        .on_level_close(|fragment, _depth| format!("{fragment}<!-- /menu -->"));

    let html = Walker::new(discard())
        .with_hooks(hooks)
        .render(&forest(chain_menu(3)));

    assert!(html.contains("<div role=\"menu\" class=\"sub-menu dropdown-menu level-0\">"));
    assert!(html.contains("<div role=\"menu\" class=\"sub-menu dropdown-menu level-1\">"));
    assert_eq!(html.matches("</div><!-- /menu -->").count(), 2);
}

#[test]
fn test_level_open_hook_replaces_wrapper() {
    let hooks = Hooks::new()
        .on_level_open(|_fragment, _depth| "<ul class=\"dropdown-menu\">".to_string())
        .on_level_close(|_fragment, _depth| "</ul>".to_string());

    let html = Walker::new(discard())
        .with_hooks(hooks)
        .render(&forest(chain_menu(2)));

    assert!(html.contains("<ul class=\"dropdown-menu\"><a href=\"/level/2\""));
    assert!(html.contains("</ul></li>"));
    assert!(!html.contains("role=\"menu\""));
}

#[test]
fn test_divider_id_can_be_restored_by_hook() {
    let hooks = Hooks::new().on_item_id(|id, item, _depth| {
        if id.is_empty() {
            format!("sep-{}", item.id)
        } else {
            id
        }
    });
    let items = vec![
        test_link(1, "Menu", "/menu").build(),
        test_link(2, "x", "").divider().with_parent(1).build(),
    ];
    let html = Walker::new(discard())
        .with_hooks(hooks)
        .render(&forest(items));
    assert!(html.contains("<div role=\"presentation\" id=\"sep-2\" class=\"dropdown-divider\"></div>"));
}

struct ShoutingEscaper;

impl Escaper for ShoutingEscaper {
    fn name(&self) -> &str {
        "shouting"
    }

    fn attr(&self, value: &str) -> String {
        value.to_uppercase()
    }

    fn url(&self, value: &str) -> String {
        format!("https://cdn.example.com{value}")
    }
}

#[test]
fn test_custom_escaper_is_used_everywhere() {
    let html = Walker::new(discard())
        .with_escaper(ShoutingEscaper)
        .render(&forest(vec![test_link(1, "Home", "/home").build()]));
    assert_eq!(
        html,
        "<li id=\"MENU-ITEM-1\" class=\"MENU-ITEM-1 NAV-ITEM\"><a href=\"https://cdn.example.com/home\" class=\"NAV-LINK\">HOME</a></li>"
    );
}
