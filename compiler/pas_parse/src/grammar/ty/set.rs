//! Set type parsing: `set of <element type>`.

use pas_diagnostic::ErrorCode;
use pas_ir::{TokenKind, TypeForm, TypeId};
use tracing::debug;

use crate::recovery::OF_SET;
use crate::Parser;

impl Parser<'_> {
    /// Parse `set of <element type>` with the cursor on `set`.
    ///
    /// A missing `of` is flagged at the current token and parsing continues
    /// with the element type, so the result is always a `Set` descriptor.
    pub fn parse_set_type(&mut self) -> TypeId {
        let start = self.cursor.current_span();
        self.cursor.advance();

        self.synchronize(OF_SET, "`of`");
        self.consume_or_flag(&TokenKind::Of, ErrorCode::E1002);

        let element = self.parse_type_spec();
        let ty = self.unit.types.alloc(TypeForm::Set { element });
        debug!(
            span = ?start.merge(self.cursor.previous_span()),
            ?element,
            ?ty,
            "set type"
        );
        ty
    }
}
