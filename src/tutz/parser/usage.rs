//! Usage strings shown with `InvalidFormat` errors. Scripts depend on these
//! spellings, so keep them stable.

pub const ADD: &str = "add: Adds a tutorial.\n\
Parameters: t/TUTORIAL_ID m/MODULE_CODE d/DATE [s/STUDENT_ID]...\n\
Example: add t/C101 m/CS2103T d/2025-01-10 s/A0123456X";

pub const EDIT: &str = "edit: Edits the tutorial at INDEX in the displayed list.\n\
Parameters: INDEX [t/TUTORIAL_ID] [m/MODULE_CODE] [d/DATE]\n\
Example: edit 1 m/CS2101 d/2025-01-17";

pub const EDIT_TUTORIAL: &str = "edit_tutorial: Edits the tutorial with the given id.\n\
Parameters: TUTORIAL_ID [t/NEW_TUTORIAL_ID] [m/MODULE_CODE] [d/DATE]\n\
Example: edit_tutorial C101 t/C102";

pub const DELETE_TUTORIAL: &str = "delete_tutorial: Deletes the tutorial with the given id.\n\
Parameters: t/TUTORIAL_ID\n\
Example: delete_tutorial t/C101";

pub const COPY_TUTORIAL: &str =
    "copy_tutorial: Copies a tutorial's module and students to a new tutorial.\n\
Parameters: t/NEW_TUTORIAL_ID f/SOURCE_TUTORIAL_ID d/DATE\n\
Example: copy_tutorial t/C102 f/C101 d/2025-01-17";

pub const ADD_STUDENT: &str = "add_student: Enrolls students in a tutorial.\n\
Parameters: t/TUTORIAL_ID s/STUDENT_ID [s/STUDENT_ID]...\n\
Example: add_student t/C101 s/A0123456X s/A0234567Y";

pub const DELETE_STUDENT: &str = "delete_student: Removes a student from a tutorial.\n\
Parameters: t/TUTORIAL_ID s/STUDENT_ID\n\
Example: delete_student t/C101 s/A0123456X";

pub const MARK: &str = "mark: Marks students as present.\n\
Parameters: t/TUTORIAL_ID s/STUDENT_ID [s/STUDENT_ID]...\n\
Example: mark t/C101 s/A0123456X";

pub const UNMARK: &str = "unmark: Marks students as absent.\n\
Parameters: t/TUTORIAL_ID s/STUDENT_ID [s/STUDENT_ID]...\n\
Example: unmark t/C101 s/A0123456X";

pub const MARK_ALL: &str = "mark_all: Marks every student in a tutorial as present.\n\
Parameters: t/TUTORIAL_ID\n\
Example: mark_all t/C101";

pub const UNMARK_ALL: &str = "unmark_all: Marks every student in a tutorial as absent.\n\
Parameters: t/TUTORIAL_ID\n\
Example: unmark_all t/C101";

pub const FIND: &str =
    "find: Shows tutorials whose module code and/or id contain any of the keywords.\n\
Parameters: [m/KEYWORD...] [t/KEYWORD...] (at least one)\n\
Example: find m/cs2103 t/lab";

pub const LIST: &str = "list: Shows all tutorials.";

pub const CLEAR: &str = "clear: Deletes every tutorial.";

pub const HELP: &str = "Commands: add, edit, edit_tutorial, delete_tutorial, copy_tutorial, \
add_student, delete_student, mark, unmark, mark_all, unmark_all, find, list, clear";
