use debuggable::{prelude::*, Conversion, RenderConfig};
use debuggable_tests::utils::init_logger;
use pretty_assertions::assert_eq;
use std::net::Ipv4Addr;

#[derive(Debuggable)]
struct Service {
    name: &'static str,
    ports: Vec<u16>,
    replicas: Option<u8>,
}

fn service() -> Service {
    Service { name: "gateway", ports: vec![80, 443, 8080], replicas: Some(3) }
}

const FLAT: &str =
    r#"Service(name = "gateway", ports = Vec(80u16, 443u16, 8080u16), replicas = Some(3u8))"#;

const BROKEN: &str = r#"Service(
  name = "gateway",
  ports = Vec(80u16, 443u16, 8080u16),
  replicas = Some(3u8)
)"#;

#[test]
fn pretty_output_breaks_only_when_needed() {
    init_logger();
    let svc = service();
    assert_eq!(svc.show(), FLAT);
    assert_eq!(svc.show_pretty(Renderer::Minimal, 100), FLAT);
    assert_eq!(svc.show_pretty(Renderer::Minimal, 80), BROKEN);
    assert_eq!(format!("{}", svc.shown()), FLAT);
    assert_eq!(format!("{:#}", svc.shown()), BROKEN);
}

#[test]
fn configuration_from_toml() {
    init_logger();
    let conf = RenderConfig::from_toml_str(
        r#"
        renderer = "full"
        pretty = true
        width = 50
        "#,
    )
    .unwrap();
    let expected = "render::Service(
  name -> gateway,
  ports -> std::vec::Vec(80, 443, 8080),
  replicas -> std::option::Some(3)
)";
    assert_eq!(service().show_config(&conf), expected);

    let flat = RenderConfig::from_toml_str("renderer = \"simple\"").unwrap();
    assert_eq!(service().show_config(&flat), "Service(gateway, Vec(80, 443, 8080), Some(3))");
}

#[test]
fn templating() {
    init_logger();
    let svc = service();
    assert_eq!(
        dformat!("{} listens on {}", svc.name, svc.ports),
        r#""gateway" listens on Vec(80u16, 443u16, 8080u16)"#
    );
    assert_eq!(
        dformat!(Renderer::Simple; "{} listens on {}", svc.name, svc.ports),
        "gateway listens on Vec(80, 443, 8080)"
    );
    assert_eq!(dformat!(Renderer::Full; "{}", svc.replicas), "std::option::Some(3)");
    let ports = &svc.ports;
    assert_eq!(dformat!("{ports}"), "Vec(80u16, 443u16, 8080u16)");
    assert_eq!(
        dformat!(Renderer::Simple; "{name}: {ports}", name = svc.name),
        "gateway: Vec(80, 443, 8080)"
    );
}

fn ip_conversion() -> Conversion<Ipv4Addr> {
    Conversion::new(|ip: &Ipv4Addr| {
        Repr::vconstructor(["std", "net"], "Ipv4Addr", [Repr::from(ip.to_string())])
    })
}

#[test]
fn conversions_cover_foreign_types() {
    init_logger();
    let ip = Ipv4Addr::new(10, 0, 0, 1);
    let conv = ip_conversion();
    assert_eq!(conv.bind(&ip).show(), r#"Ipv4Addr("10.0.0.1")"#);

    let many = conv.clone().sequence(["std", "vec"], "Vec");
    let ips = vec![ip, Ipv4Addr::LOCALHOST];
    assert_eq!(
        many.bind(&ips).show_with(Renderer::Simple),
        "Vec(Ipv4Addr(10.0.0.1), Ipv4Addr(127.0.0.1))"
    );

    let maybe = conv.option();
    assert_eq!(maybe.apply(&None).show_with(Renderer::Full), "std::option::None");

    let by_name: Conversion<Service> = Conversion::natural().contramap(|svc: &Service| &svc.name);
    assert_eq!(by_name.apply(&service()).show(), r#""gateway""#);
}
