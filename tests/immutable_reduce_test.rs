mod common;

use common::analyze_js;
use indoc::indoc;
use quadlint::core::RuleId;

#[test]
fn spreading_the_accumulator_into_an_array_recommends_push() {
    let diagnostics = analyze_js("arr.reduce((acc, item) => [...acc, item], []);");
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].rule, RuleId::NoImmutableReduce);
    assert!(diagnostics[0].message.contains("Use acc.push()"));
}

#[test]
fn mutating_the_accumulator_with_push_is_clean() {
    let diagnostics = analyze_js(indoc! {"
        arr.reduce((acc, item) => {
            acc.push(item);
            return acc;
        }, []);
    "});
    assert!(diagnostics.is_empty());
}

#[test]
fn object_spread_of_a_declared_alias_names_the_alias() {
    let diagnostics = analyze_js(indoc! {"
        arr.reduce((acc, item) => {
            const r = acc;
            return {...r, k: item};
        }, {});
    "});
    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics[0].message.contains("Mutate r directly"));
}

#[test]
fn alias_created_by_assignment_is_tracked() {
    let diagnostics = analyze_js(indoc! {"
        arr.reduce((acc, item) => {
            let r;
            r = acc;
            return r.concat(item);
        }, []);
    "});
    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics[0].message.contains("Use r.push()"));
}

#[test]
fn aliases_chain_through_intermediate_copies() {
    let diagnostics = analyze_js(indoc! {"
        arr.reduce((acc, item) => {
            const a = acc;
            const b = a;
            return [...b, item];
        }, []);
    "});
    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics[0].message.contains("Use b.push()"));
}

#[test]
fn concat_on_the_accumulator_recommends_push() {
    let diagnostics = analyze_js("arr.reduce((acc, item) => acc.concat(item), []);");
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].rule, RuleId::NoImmutableReduce);
    assert!(diagnostics[0].message.contains("concat on accumulator"));
}

#[test]
fn concat_on_an_unrelated_receiver_is_clean() {
    let diagnostics = analyze_js(indoc! {"
        arr.reduce((acc, item) => {
            extras.concat(item);
            return acc;
        }, []);
    "});
    assert!(diagnostics.is_empty());
}

#[test]
fn spread_outside_any_reduce_is_clean() {
    let diagnostics = analyze_js("const merged = [...xs, ...ys, 1];");
    assert!(diagnostics.is_empty());
}

#[test]
fn function_expression_callbacks_are_tracked_too() {
    let diagnostics = analyze_js(indoc! {"
        arr.reduce(function (acc, item) {
            return [...acc, item];
        }, []);
    "});
    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics[0].message.contains("Use acc.push()"));
}

#[test]
fn inner_reduce_does_not_inherit_outer_aliases() {
    // `acc` belongs to the outer callback; inside the inner one it is not
    // the active accumulator.
    let diagnostics = analyze_js(indoc! {"
        outer.reduce((acc, xs) => {
            const merged = xs.reduce((inner, x) => [...acc, x], []);
            return merged;
        }, []);
    "});
    assert!(diagnostics.is_empty());
}

#[test]
fn outer_scope_is_restored_after_an_inner_reduce_ends() {
    let diagnostics = analyze_js(indoc! {"
        outer.reduce((acc, xs) => {
            const merged = xs.reduce((inner, x) => {
                inner.push(x);
                return inner;
            }, []);
            return [...acc, merged];
        }, []);
    "});
    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics[0].message.contains("Use acc.push()"));
}

#[test]
fn reduce_without_a_function_literal_is_skipped() {
    let diagnostics = analyze_js("arr.reduce(combine, []);");
    assert!(diagnostics.is_empty());
}

#[test]
fn destructured_accumulator_parameter_is_skipped() {
    let diagnostics = analyze_js("arr.reduce(([head, tail], item) => [...head, item], [[], []]);");
    assert!(diagnostics.is_empty());
}

#[test]
fn rebinding_an_alias_does_not_clear_it() {
    // Alias membership models "same mutable reference"; a later reassignment
    // to something unrelated does not retract it.
    let diagnostics = analyze_js(indoc! {"
        arr.reduce((acc, item) => {
            let r = acc;
            r = item;
            return [...r, item];
        }, []);
    "});
    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics[0].message.contains("Use r.push()"));
}
