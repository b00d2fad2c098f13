/*! Test coverage for the block model.
 *
 * Block programs come from an editor over JSON, so these tests pin down how nodes parse, how
 * missing or unknown fields surface, and how the precedence ladder orders expressions.
 */
