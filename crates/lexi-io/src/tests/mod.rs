mod words_tests;
