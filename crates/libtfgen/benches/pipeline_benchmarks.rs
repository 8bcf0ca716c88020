use criterion::Criterion;
use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use libtfgen::DataSourceEmitter;
use libtfgen::QueryParserConfig;
use libtfgen::generate_data_source;
use libtfgen::parse_query;
use libtfgen::path_resolver::resolve_accessor_paths;

const DEVICE_QUERY: &str = "\
query device($device_name: String!) {
  InfraDevice(name__value: $device_name) {
    edges {
      node {
        id
        name {
          value
        }
        description {
          value
        }
        role {
          value
        }
        status {
          value
        }
        platform {
          node {
            id
          }
        }
        primary_address {
          node {
            id
          }
        }
        device_type {
          node {
            id
          }
        }
        asn {
          node {
            asn_id
          }
        }
        member_of_groups_count
      }
    }
  }
}
";

/// A collection query with `n` leaves nested two blocks under `node`.
fn wide_collection_query(n: usize) -> String {
    let mut document = String::from(
        "query Devices {\n  InfraDevice {\n    edges {\n      node {\n",
    );
    for i in 0..n {
        document.push_str(&format!(
            "        attribute_{i} {{\n          node {{\n            \
            value_{i}\n          }}\n        }}\n",
        ));
    }
    document.push_str("      }\n    }\n  }\n}\n");
    document
}

fn pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    let wide = wide_collection_query(200);
    let emitter = DataSourceEmitter::new().unwrap();
    let config = QueryParserConfig::default();

    group.bench_function("parse (device)", |b| {
        b.iter(|| black_box(parse_query(DEVICE_QUERY)))
    });

    group.bench_function("parse (wide)", |b| {
        b.iter(|| black_box(parse_query(&wide)))
    });

    let wide_parsed = parse_query(&wide).unwrap();
    group.bench_function("resolve (wide)", |b| {
        b.iter(|| black_box(resolve_accessor_paths(&wide_parsed)))
    });

    group.bench_function("generate (device)", |b| {
        b.iter(|| {
            black_box(generate_data_source(DEVICE_QUERY, &config, &emitter))
        })
    });

    group.finish();
}

criterion_group!(benches, pipeline);
criterion_main!(benches);
