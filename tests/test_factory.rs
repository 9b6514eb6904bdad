use insta::assert_snapshot;
use xmlfactory::{Error, Factory, GenericValue, XmlData};

#[test]
fn test_simplest() {
    let mut factory = Factory::new("user").unwrap();
    factory.set("name", "Alpha").unwrap();
    factory.set("login", "Bravo").unwrap();

    assert_eq!(
        factory.contents(true),
        "<?xml version=\"1.0\" ?>\n<user>\n  <name>Alpha</name>\n  <login>Bravo</login>\n</user>"
    );
    assert_eq!(
        factory.as_json().unwrap(),
        r#"{"name": "Alpha", "login": "Bravo"}"#
    );
}

#[test]
fn test_simple() {
    let mut factory = Factory::new("user").unwrap();
    factory.set("name", "Alpha").unwrap();
    factory.set("login", "Bravo").unwrap();
    factory.set("location/city", "Charlie").unwrap();

    assert_eq!(
        factory.contents(false),
        concat!(
            "<user>\n",
            "  <name>Alpha</name>\n",
            "  <login>Bravo</login>\n",
            "  <location>\n",
            "    <city>Charlie</city>\n",
            "  </location>\n",
            "</user>"
        )
    );
    let mapping = factory.as_mapping();
    assert_eq!(mapping.get("name").and_then(|v| v.as_str()), Some("Alpha"));
    assert_eq!(
        mapping
            .get("location")
            .and_then(|v| v.get("city"))
            .and_then(|v| v.as_str()),
        Some("Charlie")
    );
    assert_eq!(
        factory.as_json().unwrap(),
        r#"{"name": "Alpha", "login": "Bravo", "location": {"city": "Charlie"}}"#
    );
}

#[test]
fn test_attributes() {
    let mut factory = Factory::new("root").unwrap();
    factory.set("alpha", "Alpha").unwrap();
    factory.set("alpha@one", "1").unwrap();
    factory.set("alpha@two", 2).unwrap();
    factory.set("bravo/charlie@three", "3").unwrap();

    assert_eq!(
        factory.contents(false),
        concat!(
            "<root>\n",
            "  <alpha one=\"1\" two=\"2\">Alpha</alpha>\n",
            "  <bravo>\n",
            "    <charlie three=\"3\"/>\n",
            "  </bravo>\n",
            "</root>"
        )
    );
    // leaves with attributes convert to their attributes, text is dropped
    assert_eq!(
        factory.as_json().unwrap(),
        r#"{"alpha": {"one": "1", "two": "2"}, "bravo": {"charlie": {"three": "3"}}}"#
    );
}

#[test]
fn test_attributes_render_sorted() {
    let mut factory = Factory::new("root").unwrap();
    factory.set("alpha@two", "2").unwrap();
    factory.set("alpha@one", "1").unwrap();
    let alpha = factory.data().first_child(factory.root()).unwrap();
    assert_eq!(
        factory.data().attributes(alpha).collect::<Vec<_>>(),
        vec![("two", "2"), ("one", "1")]
    );
    assert_eq!(
        factory.contents(false),
        "<root>\n  <alpha one=\"1\" two=\"2\"/>\n</root>"
    );
}

#[test]
fn test_repeating_tags() {
    let mut factory = Factory::new("root").unwrap();
    factory.set("elements/name", "Alpha").unwrap();
    factory.set("elements/name+", "Bravo").unwrap();
    factory.set("elements/name+", "Charlie").unwrap();

    factory.set("components/component+/name", "Alpha").unwrap();
    factory.set("components/component+/name", "Bravo").unwrap();
    factory.set("components/component+/name", "Charlie").unwrap();

    assert_snapshot!(factory.contents(false), @r###"
    <root>
      <elements>
        <name>Alpha</name>
        <name>Bravo</name>
        <name>Charlie</name>
      </elements>
      <components>
        <component>
          <name>Alpha</name>
        </component>
        <component>
          <name>Bravo</name>
        </component>
        <component>
          <name>Charlie</name>
        </component>
      </components>
    </root>
    "###);

    let names = factory
        .as_mapping()
        .get("elements")
        .and_then(|v| v.get("name"))
        .cloned();
    assert_eq!(
        names,
        Some(GenericValue::Sequence(vec![
            "Alpha".into(),
            "Bravo".into(),
            "Charlie".into()
        ]))
    );
    assert_eq!(
        factory.as_json().unwrap(),
        concat!(
            r#"{"elements": {"name": ["Alpha", "Bravo", "Charlie"]}, "components": "#,
            r#"{"component": [{"name": "Alpha"}, {"name": "Bravo"}, {"name": "Charlie"}]}}"#
        )
    );
}

#[test]
fn test_hudson_job() {
    let mut factory = Factory::new("project").unwrap();
    factory.get_or_create("actions").unwrap();
    factory.get_or_create("description").unwrap();
    factory.set("logRotator/daysToKeep", 7).unwrap();
    factory.set("logRotator/numToKeep", 7).unwrap();
    factory.set("keepDependencies", false).unwrap();
    factory.get_or_create("properties").unwrap();
    factory.set("scm@class", "hudson.scm.SubversionSCM").unwrap();
    factory.set("scm/useUpdate", true).unwrap();
    factory.get_or_create("scm/excludedRegions").unwrap();
    factory.get_or_create("scm/excludedUsers").unwrap();
    factory.get_or_create("scm/excludedRevprop").unwrap();
    factory.set("assignedNode", "KATARN").unwrap();
    factory.set("canRoam", false).unwrap();
    factory.set("disabled", false).unwrap();
    factory.set("blockBuildWhenUpstreamBuilding", true).unwrap();
    factory.set("concurrentBuild", false).unwrap();
    factory.get_or_create("buildWrappers").unwrap();
    factory.set("customWorkspace", "WORKSPACE").unwrap();

    assert_snapshot!(factory.contents(false), @r###"
    <project>
      <actions/>
      <description/>
      <logRotator>
        <daysToKeep>7</daysToKeep>
        <numToKeep>7</numToKeep>
      </logRotator>
      <keepDependencies>false</keepDependencies>
      <properties/>
      <scm class="hudson.scm.SubversionSCM">
        <useUpdate>true</useUpdate>
        <excludedRegions/>
        <excludedUsers/>
        <excludedRevprop/>
      </scm>
      <assignedNode>KATARN</assignedNode>
      <canRoam>false</canRoam>
      <disabled>false</disabled>
      <blockBuildWhenUpstreamBuilding>true</blockBuildWhenUpstreamBuilding>
      <concurrentBuild>false</concurrentBuild>
      <buildWrappers/>
      <customWorkspace>WORKSPACE</customWorkspace>
    </project>
    "###);
}

#[test]
fn test_trigger_class() {
    let mut factory = Factory::new("root").unwrap();
    let mut triggers = factory.get_or_create("triggers").unwrap();
    triggers.set("@class", "vector").unwrap();

    assert_eq!(
        factory.contents(false),
        "<root>\n  <triggers class=\"vector\"/>\n</root>"
    );
    assert_eq!(
        factory.as_json().unwrap(),
        r#"{"triggers": {"class": "vector"}}"#
    );
}

#[test]
fn test_attribute_only_leaf_converts_to_mapping() {
    let factory = Factory::parse(r#"<root class="vector"/>"#).unwrap();
    assert_eq!(factory.as_json().unwrap(), r#"{"class": "vector"}"#);
}

#[test]
fn test_chained_handles() {
    let mut factory = Factory::new("root").unwrap();
    factory
        .get_or_create("a")
        .unwrap()
        .into_child("b")
        .unwrap()
        .set("c", "deep")
        .unwrap();
    let mut a = factory.get_or_create("a").unwrap();
    a.get_or_create("b").unwrap().set("d", "also").unwrap();
    assert_eq!(
        a.contents(),
        "<a>\n  <b>\n    <c>deep</c>\n    <d>also</d>\n  </b>\n</a>"
    );
}

#[test]
fn test_set_returns_owner_element() {
    let mut factory = Factory::new("root").unwrap();
    let text_node = factory.set("a", "x").unwrap();
    let attribute_owner = factory.set("a@k", "v").unwrap();
    assert_eq!(text_node, attribute_owner);
    assert_eq!(factory.data().tag(text_node), "a");
}

#[test]
fn test_lookup_creates_once() {
    let mut factory = Factory::new("root").unwrap();
    let first = factory.get_or_create("a/b").unwrap().node();
    let second = factory.get_or_create("a/b").unwrap().node();
    assert_eq!(first, second);
    assert_eq!(factory.contents(false), "<root>\n  <a>\n    <b/>\n  </a>\n</root>");
}

#[test]
fn test_set_overwrites() {
    let mut factory = Factory::new("root").unwrap();
    factory.set("a", "1").unwrap();
    factory.set("a", "2").unwrap();
    factory.set("a@k", "1").unwrap();
    factory.set("a@k", "2").unwrap();
    assert_eq!(factory.contents(false), "<root>\n  <a k=\"2\">2</a>\n</root>");
}

#[test]
fn test_empty_text_is_not_self_closing() {
    let mut factory = Factory::new("root").unwrap();
    factory.set("a", "").unwrap();
    assert_eq!(factory.contents(false), "<root>\n  <a></a>\n</root>");
}

#[test]
fn test_whitespace_text_round_trips() {
    let mut factory = Factory::new("root").unwrap();
    factory.set("a", " ").unwrap();
    factory.set("b/c", "   ").unwrap();
    let contents = factory.contents(false);
    assert_eq!(
        contents,
        "<root>\n  <a> </a>\n  <b>\n    <c>   </c>\n  </b>\n</root>"
    );
    let reparsed = Factory::parse(&contents).unwrap();
    assert_eq!(reparsed.contents(false), contents);
}

#[test]
fn test_type_error() {
    assert!(matches!(Factory::new("9"), Err(Error::InvalidRootType(_))));
    assert!(matches!(Factory::new(""), Err(Error::InvalidRootType(_))));
    assert!(matches!(
        Factory::new("a/b"),
        Err(Error::InvalidRootType(_))
    ));
}

#[test]
fn test_from_tree_rejects_foreign_node() {
    let mut other = XmlData::new();
    other.new_element_named("a");
    let foreign = other.new_element_named("b");
    assert!(matches!(
        Factory::from_tree(XmlData::new(), foreign),
        Err(Error::InvalidRootType(_))
    ));
}

#[test]
fn test_from_tree() {
    let mut data = XmlData::new();
    let root = data.parse("<doc><a>1</a></doc>").unwrap();
    let mut factory = Factory::from_tree(data, root).unwrap();
    factory.set("a@k", "v").unwrap();
    factory.set("b", "2").unwrap();
    assert_eq!(
        factory.contents(false),
        "<doc>\n  <a k=\"v\">1</a>\n  <b>2</b>\n</doc>"
    );
}

#[test]
fn test_handle_on_node() {
    let mut factory = Factory::new("root").unwrap();
    let b = factory.get_or_create("a/b").unwrap().node();
    factory.handle(b).unwrap().set("@k", "v").unwrap();
    assert_eq!(
        factory.contents(false),
        "<root>\n  <a>\n    <b k=\"v\"/>\n  </a>\n</root>"
    );
}

#[test]
fn test_handle_rejects_foreign_node() {
    let mut other = XmlData::new();
    other.new_element_named("a");
    other.new_element_named("b");
    let foreign = other.new_element_named("c");
    let mut factory = Factory::new("root").unwrap();
    assert!(matches!(
        factory.handle(foreign),
        Err(Error::UnknownNode(_))
    ));
}

#[test]
fn test_get_or_create_rejects_attribute() {
    let mut factory = Factory::new("root").unwrap();
    assert!(matches!(
        factory.get_or_create("a@b"),
        Err(Error::MalformedPath(_))
    ));
}

#[test]
fn test_malformed_path_keeps_earlier_mutations() {
    let mut factory = Factory::new("root").unwrap();
    factory.set("a", "1").unwrap();
    assert!(matches!(
        factory.set("a//b", "2"),
        Err(Error::MalformedPath(_))
    ));
    assert_eq!(factory.contents(false), "<root>\n  <a>1</a>\n</root>");
}

#[test]
fn test_write_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.xml");
    std::fs::write(&path, "previous contents that are longer than the new ones").unwrap();

    let mut factory = Factory::new("root").unwrap();
    factory.set("a", "1").unwrap();
    factory.write_file(&path, true).unwrap();

    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "<?xml version=\"1.0\" ?>\n<root>\n  <a>1</a>\n</root>"
    );

    let loaded = Factory::load(&path).unwrap();
    assert_eq!(loaded.contents(false), factory.contents(false));
}

#[test]
fn test_write_to_stream() {
    let mut factory = Factory::new("root").unwrap();
    factory.set("a", "1").unwrap();
    let mut buf = Vec::new();
    factory.write_to(&mut buf, false).unwrap();
    assert_eq!(buf, b"<root>\n  <a>1</a>\n</root>");
}
